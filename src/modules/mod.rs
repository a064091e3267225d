pub mod charts;

pub mod models {
    pub mod circuit;
    pub mod driver;

    pub mod general;
}

pub mod helpers {
    pub mod logging;
    pub mod math;

    pub mod handelbars {
        pub mod format_points;
        pub mod to_json;
    }
}
