use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::widgets::{Container, LinkButton, Size};
use crate::content::NavLink;
use crate::headline::highlight_site_name;
use crate::scroll::{on_link_click, LinkTarget};

#[component]
pub fn Nav(
    site_name: &'static str,
    full_name: &'static str,
    links: &'static [NavLink],
    #[prop(optional)] menu_open_initially: bool,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(menu_open_initially);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    let logo = highlight_site_name(site_name, full_name)
        .into_iter()
        .map(|(word, is_name)| {
            view! {
                <span class=if is_name { "text-sky-600" } else { "" }>{word} " "</span>
            }
        })
        .collect_view();

    let desktop_links = links
        .iter()
        .map(|link| {
            let target = LinkTarget::from(link.href.as_str());
            view! {
                <a
                    href=link.href.as_str()
                    class="hover:underline"
                    on:click=move |ev| on_link_click(&ev, &target)
                >
                    {link.label.as_str()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/60 border-b">
            <Container>
                <div class="grid grid-cols-3 items-center py-3">
                    <a href="#" class="font-semibold tracking-tight justify-self-start">
                        {logo}
                    </a>
                    <nav class="hidden md:flex items-center justify-center gap-8 text-sm">
                        {desktop_links}
                    </nav>
                    <div class="justify-self-end">
                        <LinkButton href="#contact" size=Size::Sm class="rounded-xl">
                            "Let's talk"
                        </LinkButton>
                    </div>
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let glyph = if menu_open.get() { Glyph::Close } else { Glyph::Menu };
                            view! { <Icon glyph class="w-5 h-5" /> }
                        }}
                    </button>
                </div>
                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="md:hidden pb-3 animate-in slide-in-from-top-2">
                                    <div class="flex flex-col gap-2">
                                        {links
                                            .iter()
                                            .map(|link| {
                                                let target = LinkTarget::from(link.href.as_str());
                                                view! {
                                                    <a
                                                        href=link.href.as_str()
                                                        class="py-1"
                                                        on:click=move |ev| {
                                                            on_link_click(&ev, &target);
                                                            close_menu.run(());
                                                        }
                                                    >
                                                        {link.label.as_str()}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                        <LinkButton
                                            href="#contact"
                                            size=Size::Sm
                                            class="rounded-xl"
                                            on_click=close_menu
                                        >
                                            "Let's talk"
                                        </LinkButton>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Container>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::SITE_CONTENT;

    fn render_nav(open: bool) -> String {
        Owner::new().with(|| {
            view! {
                <Nav
                    site_name=SITE_CONTENT.site_name.as_str()
                    full_name=SITE_CONTENT.person.name.as_str()
                    links=SITE_CONTENT.nav.as_slice()
                    menu_open_initially=open
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_closed_menu_shows_menu_glyph() {
        let html = render_nav(false);
        assert!(html.contains("extra-menu"));
        assert!(!html.contains("extra-close"));
        assert!(!html.contains("slide-in-from-top-2"));
    }

    #[test]
    fn test_open_menu_lists_links() {
        let html = render_nav(true);
        assert!(html.contains("extra-close"));
        assert!(!html.contains("extra-menu"));

        let panel = &html[html.find("slide-in-from-top-2").expect("menu panel rendered")..];
        for link in SITE_CONTENT.nav.iter() {
            assert!(panel.contains(&format!("href=\"{}\"", link.href)));
        }
        assert!(panel.contains("href=\"#contact\""));
        assert!(panel.contains("Let's talk") || panel.contains("Let&#x27;s talk"));
    }
}
