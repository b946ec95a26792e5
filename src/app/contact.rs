use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::widgets::{
    Badge, Button, Card, CardContent, CardHeader, CardTitle, Container, LinkButton, TextArea,
    TextInput, Variant,
};
use crate::content::Contact as ContactContent;

#[component]
pub fn Contact(contact: &'static ContactContent) -> impl IntoView {
    view! {
        <section id="contact" class="py-16">
            <Container>
                <div class="grid lg:grid-cols-2 gap-8 items-start">
                    <div>
                        <Badge variant=Variant::Outline class="mb-3">
                            "GET IN TOUCH"
                        </Badge>
                        <h3 class="text-3xl md:text-4xl font-bold tracking-tight">
                            "Let's collaborate"
                        </h3>
                        <p class="mt-3 text-muted-foreground max-w-prose">
                            "I'm open to internships, research projects, and collaborations. If my work resonates with you, drop a message and I'll get back quickly."
                        </p>
                        <div class="mt-6 flex flex-wrap gap-3">
                            <LinkButton
                                href=format!("mailto:{}", contact.email)
                                variant=Variant::Secondary
                                class="rounded-xl"
                            >
                                <Icon glyph=Glyph::Mail class="w-4 h-4 mr-2" />
                                {contact.email.as_str()}
                            </LinkButton>
                            <LinkButton
                                href=contact.github_url.as_str()
                                variant=Variant::Outline
                                class="rounded-xl"
                                external=true
                            >
                                <Icon glyph=Glyph::Github class="w-4 h-4 mr-2" />
                                "GitHub"
                            </LinkButton>
                            <LinkButton
                                href=contact.linkedin_url.as_str()
                                variant=Variant::Outline
                                class="rounded-xl"
                                external=true
                            >
                                <Icon glyph=Glyph::Linkedin class="w-4 h-4 mr-2" />
                                "LinkedIn"
                            </LinkButton>
                        </div>
                    </div>
                    <MessageForm />
                </div>
            </Container>
        </section>
    }
}

/// Static form; nothing is sent anywhere.
#[component]
fn MessageForm() -> impl IntoView {
    view! {
        <Card class="rounded-2xl">
            <CardHeader>
                <CardTitle>"Message me"</CardTitle>
            </CardHeader>
            <CardContent>
                <form class="space-y-3" on:submit=move |ev| ev.prevent_default()>
                    <div class="grid md:grid-cols-2 gap-3">
                        <TextInput placeholder="Your name" />
                        <TextInput placeholder="you@domain.com" kind="email" />
                    </div>
                    <TextArea placeholder="Tell me about your project..." rows=5 />
                    <Button kind="submit" class="rounded-xl">
                        "Send Message"
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}
