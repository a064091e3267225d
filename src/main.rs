use rocket::{Build, Rocket};
use rocket::fs::{FileServer, relative};
use rocket_dyn_templates::{Template};
use f1_season_explorer::modules::helpers::handelbars::format_points::FormatPoints;
use f1_season_explorer::modules::helpers::handelbars::to_json::ToJson;
use f1_season_explorer::modules::helpers::logging::setup_logging;
use f1_season_explorer::modules::models::general::DataStore;

#[macro_use] extern crate rocket;

use f1_season_explorer::routes::{circuit, season};

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("failed to setup logging");

    // the source tables are read once here; every request borrows them
    // through managed state.
    let store = DataStore::load().expect("failed to load season data");

    rocket::build()
        .manage(store)
        .attach(Template::custom(|engines| {
            engines.handlebars.register_helper("toJson", Box::new(ToJson));
            engines.handlebars.register_helper("formatPoints", Box::new(FormatPoints));
            engines.handlebars.set_strict_mode(true);
        }))
        .mount("/", routes![
            season::index,
            season::season,
            circuit::single,
        ])
        .mount("/static", FileServer::from(relative!("static")))
}
