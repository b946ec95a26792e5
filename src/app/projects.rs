use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use super::widgets::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, Container, LinkButton,
    Variant,
};
use crate::content::Project;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section
            id="projects"
            class="py-16 border-b bg-gradient-to-b from-transparent to-slate-50/60"
        >
            <Container>
                <Badge variant=Variant::Outline class="mb-4">
                    "PROJECTS"
                </Badge>
                <div class="grid md:grid-cols-3 gap-6">
                    {projects.iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card class="rounded-2xl">
            <CardHeader>
                <CardTitle class="text-xl">{project.title.as_str()}</CardTitle>
                <CardDescription>{project.desc.as_str()}</CardDescription>
            </CardHeader>
            <CardContent>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|t| {
                            view! {
                                <Badge variant=Variant::Secondary class="rounded-full">
                                    {t.as_str()}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
                <LinkButton href=project.href.as_str() variant=Variant::Ghost class="px-0">
                    "View project"
                    <Icon glyph=Glyph::ExternalLink class="w-4 h-4 ml-1" />
                </LinkButton>
            </CardContent>
        </Card>
    }
}
