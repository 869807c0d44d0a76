pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod snapshot_store;
    }
}

pub mod modules {
    pub mod cycles {
        pub mod core {
            pub mod countdown;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod start_cycle {
                pub mod command;
                pub mod decide;
                pub mod form;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod interrupt_cycle {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod mark_cycle_finished {
                pub mod command;
                pub mod decide;
            }
            pub mod tick_countdown {
                pub mod tick;
                pub mod ticker;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_cycles {
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod snapshot;
            }
        }
        pub mod store;
    }
}

pub mod shell;
