use leptos::prelude::*;

use super::background::HeroBackground;
use super::icons::{Glyph, Icon};
use super::widgets::{Badge, Container, LinkButton, Size, Variant};
use crate::content::{Background, Person};
use crate::headline::{highlight_headline, HeadlineWord};

#[component]
pub fn Hero(person: &'static Person, background: &'static Background) -> impl IntoView {
    let headline = highlight_headline(&person.headline, &person.name)
        .into_iter()
        .map(|HeadlineWord { text, emphasized, line_break_after }| {
            view! {
                <span class=if emphasized { "text-sky-600" } else { "" }>{text} " "</span>
                {line_break_after.then(|| view! { <br /> })}
            }
        })
        .collect_view();

    let primary = &person.primary_cta;
    let secondary = &person.secondary_cta;

    view! {
        <section class="relative border-b min-h-screen flex items-center pb-20 overflow-hidden">
            <div class="absolute inset-0 z-0">
                <HeroBackground background />
            </div>
            <Container>
                <div class="relative z-10 gap-10 items-center py-16">
                    <div class="relative rounded-3xl bg-white/80 backdrop-blur border border-white/30 shadow-lg p-10">
                        <Badge variant=Variant::Outline class="mb-4 text-sky-800">
                            {person.tagline.as_str()}
                        </Badge>
                        <h1 class="text-4xl md:text-6xl font-bold tracking-tight leading-tight text-gray-900 drop-shadow-sm">
                            {headline}
                        </h1>
                        <p class="mt-4 text-lg text-gray-700 max-w-3xl">{person.sub.as_str()}</p>
                        <div class="mt-6 flex flex-col sm:flex-row gap-3">
                            <LinkButton
                                href=primary.href.as_str()
                                size=Size::Lg
                                class="rounded-xl"
                                download=primary.download
                            >
                                {primary.label.as_str()}
                                <Icon glyph=Glyph::ArrowRight class="ml-2 w-5 h-5" />
                            </LinkButton>
                            <LinkButton
                                href=secondary.href.as_str()
                                variant=Variant::Outline
                                size=Size::Lg
                                class="rounded-xl"
                                download=secondary.download
                            >
                                {secondary.label.as_str()}
                                <Icon glyph=Glyph::Download class="ml-2 w-5 h-5" />
                            </LinkButton>
                        </div>
                    </div>
                    <div class="hidden lg:block"></div>
                </div>
            </Container>
        </section>
    }
}
