use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::widgets::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, Container, Variant,
};
use crate::content::About as AboutContent;

#[component]
pub fn About(about: &'static AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="py-16 border-b">
            <Container>
                <div class="grid lg:grid-cols-3 gap-8 items-start">
                    <div class="lg:col-span-2">
                        <Badge variant=Variant::Outline class="mb-3">
                            "ABOUT ME"
                        </Badge>
                        <h2 class="text-3xl md:text-4xl font-bold tracking-tight">
                            {about.title.as_str()}
                        </h2>
                        <div class="mt-4 space-y-4 text-muted-foreground">
                            {about
                                .paragraphs
                                .iter()
                                .map(|p| view! { <p>{p.as_str()}</p> })
                                .collect_view()}
                        </div>
                    </div>
                    <Card class="rounded-2xl">
                        <CardHeader>
                            <CardTitle>"Highlights"</CardTitle>
                            <CardDescription class="sr-only">"Key strengths"</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <ul class="space-y-3">
                                {about
                                    .highlights
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <li class="flex gap-2 items-start text-sm">
                                                <Icon
                                                    glyph=Glyph::CheckCircle
                                                    class="w-4 h-4 mt-0.5 text-sky-500"
                                                />
                                                {h.as_str()}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </CardContent>
                    </Card>
                </div>
            </Container>
        </section>
    }
}
