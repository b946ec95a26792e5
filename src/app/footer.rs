use leptos::prelude::*;

use super::widgets::Container;
use crate::headline::current_copyright;

#[component]
pub fn Footer(name: &'static str, note: &'static str) -> impl IntoView {
    view! {
        <footer class="border-t py-10">
            <Container>
                <div class="text-sm text-muted-foreground">{current_copyright(name, note)}</div>
            </Container>
        </footer>
    }
}
