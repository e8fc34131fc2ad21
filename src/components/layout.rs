//! Authenticated shell: sidebar + header around the page content

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_navigate};
use crate::components::{Header, Sidebar};
use crate::routes::{page_for_path, page_title, Page};
use crate::state::AppSession;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let location = use_location();

    // Local to the shell, expanded by default
    let collapsed = RwSignal::new(false);

    let current = Memo::new(move |_| page_for_path(&location.pathname.get()));
    let title = Signal::derive(move || page_title(&location.pathname.get()));

    let navigate = use_navigate();
    let on_navigate = Callback::new(move |page: Page| {
        navigate(page.path(), Default::default());
    });

    let navigate = use_navigate();
    let logout_session = session.clone();
    let on_logout = Callback::new(move |_: ()| {
        let destination = logout_session.logout();
        navigate(destination, Default::default());
    });

    let app_name = session.config.app_name.clone();
    let document_title = move || match title.get() {
        "" => app_name.clone(),
        t => format!("{} · {}", t, app_name),
    };

    view! {
        <Title text=document_title />
        <div class="flex h-screen bg-gray-50">
            <Sidebar
                current=current.into()
                collapsed=collapsed
                on_navigate=on_navigate
                on_logout=on_logout
            />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header title=title on_navigate=on_navigate on_logout=on_logout />
                <main class="flex-1 overflow-auto">
                    {children()}
                </main>
            </div>
        </div>
    }
}
