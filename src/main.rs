#[cfg(feature = "web")]
fn main() {
    dioxus::launch(salon_booking::view::app::App);
}

#[cfg(not(feature = "web"))]
fn main() {
    eprintln!("salon-web is built with `--features web`, use salon-cli for the terminal client");
}
