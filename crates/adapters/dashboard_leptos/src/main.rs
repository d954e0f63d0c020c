use emsdash_dashboard::App;
use leptos::prelude::*;

fn main() {
    mount_to_body(App);
}
