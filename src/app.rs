mod home;
mod icon;
mod landing;
mod technologies;
mod ui;
mod unitrade;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use home::HomePage;
use landing::LandingPage;
use unitrade::UniTradePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Jack - {title}") />

        <Router>
            <div class="flex flex-col min-h-screen">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/unitrade") view=UniTradePage />
                    <Route path=path!("/landing") view=LandingPage />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not Found" />
        <main class="flex flex-col flex-grow justify-center items-center">
            <h1 class="font-bold text-2xl">"Page not found."</h1>
            <a href="/" class="mt-4 text-blue-400 hover:underline">
                "Back home"
            </a>
        </main>
    }
}
