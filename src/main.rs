//! Item List Frontend Entry Point

use item_list_ui::app::App;
use item_list_ui::config::AppConfig;
use item_list_ui::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
