pub mod application {
    pub mod prediction {
        pub mod predict;
    }
}

pub mod domain {
    pub mod logger;
    pub mod prediction {
        pub mod catalog;
        pub mod selector;
        pub mod use_cases {
            pub mod predict;
        }
    }
}
