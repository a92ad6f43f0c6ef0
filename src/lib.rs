pub mod modules {
    pub mod notes {
        pub mod core {
            pub mod collection;
            pub mod errors;
            pub mod note;
        }
        pub mod use_cases {
            pub mod get_notes {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_note {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_note {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_note {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
                pub mod id_param;
                pub mod json_body;
            }
            pub mod outbound {
                pub mod note_repository;
                pub mod note_repository_in_memory;
            }
        }
    }
}

pub mod shell;
