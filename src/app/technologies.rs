use leptos::{either::Either, ev::KeyboardEvent, prelude::*};

use super::ui::{
    Card, CardContent, CardHeader, CardTitle, Image, Tabs, TabsContent, TabsList, TabsTrigger,
};
use crate::content::catalog;
use crate::portfolio::{Catalog, Experience, ExperienceSelector, TechCategory, Technology};

const BADGE_ICON_SIZE: u32 = 32;

#[component]
pub fn TechnologiesPanel() -> impl IntoView {
    let body = match catalog() {
        Ok(catalog) => Either::Left(view! {
            <h2 class="text-4xl font-bold mb-8 text-gray-300">"Technologies I've worked with"</h2>
            <TechnologyTabs catalog />
            <h2 class="text-4xl font-bold mb-8 text-gray-300">"Experience"</h2>
            <ExperienceBrowser experiences=&catalog.experiences />
        }),
        Err(e) => {
            log::error!("technologies panel: {e}");
            Either::Right(view! {
                <p class="text-gray-500">"Technologies and experience are unavailable right now."</p>
            })
        }
    };
    view! { <section class="py-16 px-4 bg-black text-white">{body}</section> }
}

#[component]
pub fn TechnologyTabs(catalog: &'static Catalog) -> impl IntoView {
    let active = RwSignal::new(TechCategory::default().value().to_string());
    view! {
        <Tabs active class="mb-16">
            <TabsList class="bg-gray-900 p-1 rounded-md">
                {TechCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <TabsTrigger
                                value=category.value()
                                class="data-[state=active]:bg-blue-500 rounded px-4 py-2 text-sm"
                            >
                                {category.label()}
                            </TabsTrigger>
                        }
                    })
                    .collect_view()}
            </TabsList>
            {TechCategory::ALL
                .into_iter()
                .map(|category| {
                    let technologies = catalog.technologies_in(category);
                    view! {
                        <TabsContent value=category.value() class="mt-4">
                            {(!technologies.is_empty())
                                .then(|| {
                                    view! {
                                        <Card class="bg-gray-900 border-gray-800">
                                            <CardHeader>
                                                <CardTitle class="text-gray-400 text-sm">
                                                    "These are my most used technologies."
                                                </CardTitle>
                                            </CardHeader>
                                            <CardContent class="flex flex-wrap gap-4">
                                                <TechnologyBadges technologies />
                                            </CardContent>
                                        </Card>
                                    }
                                })}
                        </TabsContent>
                    }
                })
                .collect_view()}
        </Tabs>
    }
}

#[component]
pub fn TechnologyBadges(technologies: &'static [Technology]) -> impl IntoView {
    technologies
        .iter()
        .map(|tech| {
            view! {
                <div
                    class="flex items-center justify-center w-16 h-16 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors"
                    title=tech.name.as_str()
                    data-badge=tech.name.as_str()
                >
                    <Image
                        src=tech.icon.as_str()
                        alt=tech.name.as_str()
                        width=BADGE_ICON_SIZE
                        height=BADGE_ICON_SIZE
                    />
                </div>
            }
        })
        .collect_view()
}

/// Moves the browser to entry `index`. Re-selecting the current entry or an
/// out-of-range index leaves the signal untouched, so nothing re-renders.
pub fn select_experience(selector: RwSignal<ExperienceSelector<'static>>, index: usize) {
    let mut next = selector.get_untracked();
    if next.selected() == index {
        return;
    }
    match next.select(index) {
        Ok(exp) => {
            log::debug!("showing experience {index}: {}", exp.company);
            selector.set(next);
        }
        Err(e) => log::warn!("ignoring selection: {e}"),
    }
}

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Company list on the left, detail of the selected entry on the right.
#[component]
pub fn ExperienceBrowser(
    experiences: &'static [Experience],
    #[prop(optional)] selector: Option<RwSignal<ExperienceSelector<'static>>>,
) -> impl IntoView {
    let selector = selector.unwrap_or_else(|| RwSignal::new(ExperienceSelector::new(experiences)));
    let selected = Memo::new(move |_| selector.with(|s| s.selected()));

    view! {
        <div class="grid grid-cols-4 gap-4">
            <div class="col-span-1 space-y-2">
                {experiences
                    .iter()
                    .enumerate()
                    .map(|(index, exp)| {
                        let is_selected = move || selected.get() == index;
                        view! {
                            <div
                                role="button"
                                tabindex="0"
                                class=move || {
                                    if is_selected() {
                                        "bg-gray-800 rounded-lg p-3 cursor-pointer ring-1 ring-blue-500 transition-colors"
                                    } else {
                                        "bg-gray-900 rounded-lg p-3 cursor-pointer hover:bg-gray-800 transition-colors"
                                    }
                                }
                                aria-pressed=move || is_selected().to_string()
                                on:click=move |_| select_experience(selector, index)
                                on:keydown=move |ev: KeyboardEvent| {
                                    if is_activation_key(&ev.key()) {
                                        ev.prevent_default();
                                        select_experience(selector, index);
                                    }
                                }
                            >
                                <h3 class="font-semibold text-blue-400">{exp.company.as_str()}</h3>
                                <p class="text-gray-400 text-sm">{exp.position.as_str()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="col-span-3">
                {move || {
                    experiences
                        .get(selected.get())
                        .map(|experience| view! { <ExperienceDetail experience /> })
                }}
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceDetail(experience: &'static Experience) -> impl IntoView {
    view! {
        <Card class="bg-gray-900 border-gray-800">
            <CardHeader>
                <CardTitle class="text-xl font-semibold">{experience.company.as_str()}</CardTitle>
                <p class="text-gray-400">{experience.position.as_str()}</p>
                <p class="text-gray-500 text-sm">{experience.period.to_string()}</p>
            </CardHeader>
            <CardContent>
                <p class="text-gray-300 mb-4">{experience.description.as_str()}</p>
                <div class="flex flex-wrap gap-2">
                    {experience
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span
                                    class="px-2 py-1 bg-gray-800 rounded-full text-xs text-gray-300"
                                    data-tag=tech.as_str()
                                >
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}
