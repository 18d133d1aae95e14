//! Dioxus-based energy statistics dashboard for PowerSmart
//!
//! A pure Rust frontend that compiles to WebAssembly. The site has three
//! client-side pages toggled without navigation; the televisions page
//! fetches the registry CSV once, lazily, the first time it becomes
//! visible, and renders the four energy charts from it.

use dioxus::prelude::*;
use gloo_net::http::Request;
use powersmart_core::{
    brand_chart, parse_dataset, power_chart, sample_power_points, size_chart, size_distribution,
    tech_chart, technology_breakdown, top_brands, ChartLoadLatch, Dataset, Error, Page, PageState,
    Scene, Theme, MAX_POWER_POINTS,
};

mod svg;

use svg::{SvgScene, TooltipCtx, TooltipOverlay};

const DATA_URL: &str = "data/tv_energy.csv";

/// Shown in every chart container when the load fails
const LOAD_ERROR_TEXT: &str = "Error loading data. Please ensure the CSV file is accessible.";

/// The four chart container slots, in page order
const CHART_SLOTS: [&str; 4] = ["chart-sizes", "chart-tech", "chart-power", "chart-brands"];

fn main() {
    tracing_wasm::set_as_global_default();
    launch(App);
}

/// Chart pipeline state for the televisions page
#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    /// The page has never been activated; containers stay empty
    Idle,
    Loading,
    Ready(ChartSet),
    Failed(String),
}

/// One scene per chart container
#[derive(Clone, Debug, PartialEq)]
struct ChartSet {
    sizes: Scene,
    tech: Scene,
    power: Scene,
    brands: Scene,
}

#[component]
fn App() -> Element {
    let mut page_state = use_signal(PageState::new);
    let mut latch = use_signal(ChartLoadLatch::new);
    let mut charts = use_signal(|| LoadState::Idle);

    let tooltip = use_signal(|| None);
    use_context_provider(|| TooltipCtx(tooltip));

    // The whole load-and-render pipeline. The visibility watcher below and
    // the manual reload control both land here.
    let load_charts = move || {
        charts.set(LoadState::Loading);
        spawn(async move {
            match load_chart_set().await {
                Ok(set) => charts.set(LoadState::Ready(set)),
                Err(err) => {
                    tracing::error!("dataset load failed: {err}");
                    charts.set(LoadState::Failed(err.to_string()));
                }
            }
        });
    };

    let show_page = move |name: &str| page_state.write().show(name);

    // Visibility watcher: follows every page transition, keeps the tab
    // title current and arms the one-shot chart load for the televisions
    // page. The latch spends itself after the first fire.
    use_effect(move || {
        let active = page_state.read().active();
        set_document_title(page_state.read().document_title());
        if latch.write().should_load(active) {
            load_charts();
        }
    });

    rsx! {
        style { {include_str!("styles.css")} }

        div { class: "app",
            header { class: "header",
                div { class: "header-content",
                    h1 { class: "logo", "PowerSmart" }
                    nav { class: "nav",
                        for page in Page::ALL {
                            NavLink {
                                page,
                                active: page_state.read().is_active(page),
                                onclick: move |_| show_page(page.name()),
                            }
                        }
                    }
                }
            }

            main { class: "content",
                PageSection {
                    page: Page::Home,
                    active: page_state.read().is_active(Page::Home),
                    HomePage {}
                }
                PageSection {
                    page: Page::Televisions,
                    active: page_state.read().is_active(Page::Televisions),
                    TelevisionsPage {
                        charts: charts.read().clone(),
                        on_reload: move |_| load_charts(),
                    }
                }
                PageSection {
                    page: Page::About,
                    active: page_state.read().is_active(Page::About),
                    AboutPage {}
                }
            }

            footer { class: "footer",
                p { "PowerSmart · The Smart Buyer's Guide to TV Energy Use" }
            }

            TooltipOverlay {}
        }
    }
}

#[component]
fn NavLink(page: Page, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let id = format!("nav-{}", page.name());
    let class = if active { "nav-link active" } else { "nav-link" };

    rsx! {
        a {
            id: "{id}",
            class: "{class}",
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                onclick.call(evt);
            },
            {page.nav_label()}
        }
    }
}

/// One of the three page sections. All of them stay mounted; visibility is
/// a class toggle, so the televisions page keeps its chart state when the
/// user navigates away and back.
#[component]
fn PageSection(page: Page, active: bool, children: Element) -> Element {
    let id = format!("page-{}", page.name());
    let class = if active { "page active" } else { "page" };

    rsx! {
        section { id: "{id}", class: "{class}", {children} }
    }
}

#[component]
fn HomePage() -> Element {
    rsx! {
        div { class: "hero",
            h2 { "Buy smarter. Watch greener." }
            p {
                "PowerSmart digs through the television energy registry so you "
                "don't have to: thousands of registered models, their measured "
                "power draw and their efficiency ratings, summarised in a few "
                "honest charts."
            }
            p {
                "Head over to the Televisions page to explore screen sizes, "
                "display technologies, power consumption and the brands behind "
                "them."
            }
        }
    }
}

#[component]
fn TelevisionsPage(charts: LoadState, on_reload: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page-heading",
            h2 { "Television Energy Statistics" }
            button { class: "reload", onclick: move |_| on_reload.call(()), "Reload data" }
        }

        if let LoadState::Loading = charts {
            LoadingSpinner {}
        } else if let LoadState::Failed(_) = charts {
            div { class: "charts",
                for slot in CHART_SLOTS {
                    div { id: "{slot}", class: "chart-container",
                        p { class: "chart-error", "{LOAD_ERROR_TEXT}" }
                    }
                }
            }
        } else if let LoadState::Ready(set) = &charts {
            div { class: "charts",
                div { id: "chart-sizes", class: "chart-container",
                    SvgScene { scene: set.sizes.clone() }
                }
                div { id: "chart-tech", class: "chart-container",
                    SvgScene { scene: set.tech.clone() }
                }
                div { id: "chart-power", class: "chart-container",
                    SvgScene { scene: set.power.clone() }
                }
                div { id: "chart-brands", class: "chart-container",
                    SvgScene { scene: set.brands.clone() }
                }
            }
        } else {
            div { class: "charts",
                for slot in CHART_SLOTS {
                    div { id: "{slot}", class: "chart-container" }
                }
            }
        }
    }
}

#[component]
fn AboutPage() -> Element {
    rsx! {
        div { class: "prose",
            h2 { "About PowerSmart" }
            p {
                "PowerSmart is a small, independent guide to the energy "
                "footprint of televisions. The numbers come straight from the "
                "public energy-rating registry; we aggregate them in your "
                "browser and draw what we find."
            }
            p {
                "No accounts, no tracking, no server. Just the data."
            }
        }
    }
}

#[component]
fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            p { "Loading energy data..." }
        }
    }
}

/// Fetch, parse and aggregate, producing the four chart scenes.
async fn load_chart_set() -> Result<ChartSet, Error> {
    let dataset = fetch_dataset().await?;
    Ok(build_charts(&dataset))
}

/// Fetch and parse the registry CSV. No caching: every call re-fetches.
async fn fetch_dataset() -> Result<Dataset, Error> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(Error::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    parse_dataset(&text)
}

/// Run the four aggregators and scene builders over one parsed snapshot.
fn build_charts(dataset: &Dataset) -> ChartSet {
    let theme = Theme::default();
    let records = &dataset.records;
    let mut rng = rand::thread_rng();

    ChartSet {
        sizes: size_chart(&size_distribution(records), &theme),
        tech: tech_chart(&technology_breakdown(records), &theme),
        power: power_chart(
            &sample_power_points(records, MAX_POWER_POINTS, &mut rng),
            &theme,
        ),
        brands: brand_chart(&top_brands(records), &theme),
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
