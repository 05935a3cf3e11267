use chemical_inventory_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    chemical_inventory_ui::logging::init();
    leptos::mount::mount_to_body(App);
}
