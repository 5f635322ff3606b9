pub mod application {
    pub mod relay {
        pub mod forward;
    }
}

pub mod domain {
    pub mod logger;
    pub mod relay {
        pub mod errors;
        pub mod model;
        pub mod origin;
        pub mod services;
        pub mod use_cases {
            pub mod forward;
        }
    }
}
