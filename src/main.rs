// src/main.rs
use entra_token_inspector::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
