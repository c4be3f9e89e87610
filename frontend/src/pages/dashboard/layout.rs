use leptos::*;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"\u{1F4DA} Acme Learning Dashboard"</h1>
            <p class="subtitle">"Your personal learning hub"</p>
        </header>
    }
}

#[component]
pub fn DashboardFooter() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>"\u{00A9} 2026 Acme Learning. All rights reserved."</p>
        </footer>
    }
}

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <div class="app-container">
            <DashboardHeader/>
            <div class="dashboard-grid">{children()}</div>
            <DashboardFooter/>
        </div>
    }
}

#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    view! { <aside class="sidebar">{children()}</aside> }
}

#[component]
pub fn MainContent(children: Children) -> impl IntoView {
    view! { <main class="main-content">{children()}</main> }
}
