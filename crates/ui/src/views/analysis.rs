use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{AuthState, Notices, WizardStore};
use crate::views::{MissingArtifact, report_api_failure};
use crate::vm::{map_topic_rows, map_year_rows};

const TOP_TOPIC_LIMIT: usize = 8;

#[component]
pub fn AnalysisView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let mut wizard = use_context::<WizardStore>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let busy = use_signal(|| false);

    let snapshot = wizard.snapshot();
    let (Some(analysis), Some(session_id)) =
        (snapshot.analysis().cloned(), snapshot.session_id().cloned())
    else {
        return rsx! {
            MissingArtifact {
                title: "Analysis data missing",
                body: "It looks like the session has expired or the page was reloaded. \
                       Please upload your papers again.",
            }
        };
    };

    let topic_rows = map_topic_rows(&analysis, TOP_TOPIC_LIMIT);
    let year_rows = map_year_rows(&analysis);

    let on_generate = {
        let api = ctx.api();
        let auth = auth.clone();
        move |_| {
            if busy() {
                return;
            }
            let api = api.clone();
            let mut auth = auth.clone();
            let mut notices = notices;
            let mut busy = busy;
            let session_id = session_id.clone();
            spawn(async move {
                busy.set(true);
                match api.generate_paper(&session_id).await {
                    Ok(paper) => match wizard.set_paper(paper) {
                        Ok(()) => {
                            auth.refresh().await;
                            notices.success("Question paper generated");
                            navigator.push(Route::Paper {});
                        }
                        Err(err) => notices.error(err.to_string()),
                    },
                    Err(err) => report_api_failure(err, &mut auth, &mut notices).await,
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        div { class: "page analysis-page",
            header { class: "view-header",
                h2 { class: "view-title", "Pattern analysis" }
                p { class: "view-subtitle",
                    "{analysis.total_questions} questions analyzed across your uploaded papers."
                }
            }

            div { class: "stats-row",
                div { class: "stat-card",
                    span { class: "stat-value", "{analysis.total_questions}" }
                    span { class: "stat-label", "Total questions" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{analysis.topics.len()}" }
                    span { class: "stat-label", "Unique topics" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{analysis.years_analyzed()}" }
                    span { class: "stat-label", "Years analyzed" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{analysis.predicted_topics.len()}" }
                    span { class: "stat-label", "Predicted topics" }
                }
            }

            div { class: "analysis-grid",
                div { class: "card analysis-card",
                    h3 { class: "card-title", "Topic frequency" }
                    p { class: "card-subtitle", "How often each topic appeared across all papers" }
                    div { class: "topic-bars",
                        for row in topic_rows.iter() {
                            div { class: "topic-bar-row",
                                span { class: "topic-bar-name", "{row.topic}" }
                                div { class: "topic-bar-track",
                                    div {
                                        class: "topic-bar-fill",
                                        style: "width: {row.share}%",
                                    }
                                }
                                span { class: "topic-bar-count", "{row.count}" }
                            }
                        }
                    }
                }

                if year_rows.len() > 1 {
                    div { class: "card analysis-card",
                        h3 { class: "card-title", "Year-wise distribution" }
                        p { class: "card-subtitle", "Number of questions per year" }
                        ul { class: "year-list",
                            for row in year_rows.iter() {
                                li { class: "year-row",
                                    span { class: "year-label", "{row.year}" }
                                    if row.count == 1 {
                                        span { class: "year-count", "1 question" }
                                    } else {
                                        span { class: "year-count", "{row.count} questions" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card predicted-card",
                div { class: "predicted-header",
                    h3 { "Predicted topics for this year" }
                    span { class: "badge", "AI prediction" }
                }
                ol { class: "predicted-topics",
                    for topic in analysis.predicted_topics.iter() {
                        li { class: "predicted-topic", "{topic}" }
                    }
                }
            }

            div { class: "card insights-card",
                h3 { "Pattern insights" }
                ul { class: "insights-list",
                    for insight in analysis.pattern_insights.iter() {
                        li { class: "insight-item", "{insight}" }
                    }
                }
            }

            div { class: "view-cta",
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    disabled: busy(),
                    onclick: on_generate,
                    if busy() { "Generating paper..." } else { "Generate predicted paper" }
                }
                p { class: "cta-hint", "A full question paper built from these patterns" }
            }
        }
    }
}
