use leptos::prelude::*;

use crate::scroll::{on_link_click, LinkTarget};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl Variant {
    fn button_class(self) -> &'static str {
        match self {
            Variant::Primary => "bg-slate-900 text-white hover:bg-slate-800",
            Variant::Secondary => "bg-slate-100 text-slate-900 hover:bg-slate-200",
            Variant::Outline => "border border-slate-300 bg-white hover:bg-slate-50",
            Variant::Ghost => "hover:bg-slate-100",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Variant::Primary => "bg-slate-900 text-white",
            Variant::Secondary => "bg-slate-100 text-slate-900",
            Variant::Outline | Variant::Ghost => "border border-slate-300",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    fn class(self) -> &'static str {
        match self {
            Size::Sm => "h-8 px-3 text-sm",
            Size::Md => "h-10 px-4 py-2",
            Size::Lg => "h-11 px-8 text-base",
        }
    }
}

const BUTTON_BASE: &str =
    "inline-flex items-center justify-center font-medium transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-sky-500";

fn button_classes(variant: Variant, size: Size, class: &str) -> String {
    format!("{BUTTON_BASE} {} {} {class}", variant.button_class(), size.class())
}

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! { <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">{children()}</div> }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional)] class: &'static str,
    #[prop(default = "button")] kind: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button type=kind class=button_classes(variant, size, class)>
            {children()}
        </button>
    }
}

/// Anchor styled as a button. In-page hrefs smooth-scroll; external links
/// open in a new tab.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] download: bool,
    #[prop(optional)] external: bool,
    /// Runs after the link has been handled.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let target = LinkTarget::classify(&href, download);
    view! {
        <a
            href=href
            class=button_classes(variant, size, class)
            download=download.then_some("")
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            on:click=move |ev| {
                on_link_click(&ev, &target);
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-md px-2.5 py-0.5 text-xs font-semibold {} {class}",
            variant.badge_class(),
        )>{children()}</span>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("border bg-white text-slate-900 shadow-sm {class}")>{children()}</div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 p-6">{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <h3 class=format!("font-semibold leading-none tracking-tight {class}")>{children()}</h3>
    }
}

#[component]
pub fn CardDescription(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <p class=format!("text-sm text-muted-foreground {class}")>{children()}</p> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="p-6 pt-0">{children()}</div> }
}

const FIELD_CLASS: &str = "w-full rounded-md border border-slate-300 bg-white px-3 py-2 text-sm placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-sky-500";

#[component]
pub fn TextInput(
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! { <input type=kind placeholder=placeholder class=FIELD_CLASS /> }
}

#[component]
pub fn TextArea(placeholder: &'static str, #[prop(default = 3)] rows: u32) -> impl IntoView {
    view! { <textarea placeholder=placeholder rows=rows class=FIELD_CLASS></textarea> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes_compose() {
        let class = button_classes(Variant::Outline, Size::Lg, "rounded-xl");
        assert!(class.starts_with(BUTTON_BASE));
        assert!(class.contains("border-slate-300"));
        assert!(class.contains("h-11"));
        assert!(class.ends_with("rounded-xl"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Variant::default(), Variant::Primary);
        assert_eq!(Size::default(), Size::Md);
    }
}
