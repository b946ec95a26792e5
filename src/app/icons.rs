use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    CheckCircle,
    Close,
    Download,
    ExternalLink,
    Github,
    Linkedin,
    Mail,
    Menu,
}

impl Glyph {
    fn class(self) -> &'static str {
        match self {
            Glyph::ArrowRight => "extra-arrow-right",
            Glyph::CheckCircle => "extra-check-circle",
            Glyph::Close => "extra-close",
            Glyph::Download => "extra-download",
            Glyph::ExternalLink => "extra-link",
            Glyph::Github => "devicon-github-plain",
            Glyph::Linkedin => "devicon-linkedin-plain",
            Glyph::Mail => "extra-email",
            Glyph::Menu => "extra-menu",
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", glyph.class()) aria-hidden="true"></i> }
}
