#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open`
    use foodiecircle::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // client-side only; build with the `csr` feature
}
