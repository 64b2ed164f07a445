use chrono::Local;
use dioxus::prelude::*;
use pkg_panel::RequestPanel;
use pkg_types::SecretType;
use pkg_types::table::{HEADERS, rows};

use crate::api;

/// Creation form and listing. Loads once on mount; a successful submit
/// resets the form and loads again. Failures only reach the log.
#[component]
pub fn Requests() -> Element {
    let mut panel = use_signal(RequestPanel::new);

    let reload = move || {
        spawn(async move {
            let result = api::list_secret_requests().await;
            panel.write().finish_load(result);
        })
    };

    // On mount
    use_hook(move || reload());

    let submit = move |_: MouseEvent| {
        let body = panel.read().draft_body();
        spawn(async move {
            let result = api::create_secret_request(body).await;
            let reload_needed = panel.write().finish_submit(result);
            if reload_needed {
                reload();
            }
        });
    };

    let draft = panel.read().draft().clone();
    let table = rows(panel.read().requests(), &Local);

    rsx! {
        section { class: "card",
            h3 { "Create Secret Request" }
            div { class: "form",
                input {
                    r#type: "text",
                    placeholder: "Secret Name",
                    value: "{draft.secret_name}",
                    oninput: move |evt| panel.write().set_secret_name(evt.value()),
                }
                select {
                    value: "{draft.secret_type}",
                    onchange: move |evt| {
                        if let Ok(ty) = evt.value().parse::<SecretType>() {
                            panel.write().set_secret_type(ty);
                        }
                    },
                    for ty in SecretType::ALL {
                        option { value: "{ty}", selected: ty == draft.secret_type, "{ty.label()}" }
                    }
                }
                textarea {
                    placeholder: "Justification",
                    value: "{draft.justification}",
                    oninput: move |evt| panel.write().set_justification(evt.value()),
                }
                button { onclick: submit, "Create Request" }
            }
        }

        section {
            h3 { "Secret Requests" }
            table { class: "requests",
                thead {
                    tr {
                        for h in HEADERS {
                            th { "{h}" }
                        }
                    }
                }
                tbody {
                    for row in table.iter() {
                        tr { key: "{row.id}",
                            td { "{row.id}" }
                            td { "{row.secret_name}" }
                            td { "{row.secret_type}" }
                            td { "{row.status}" }
                            td { "{row.created}" }
                        }
                    }
                }
            }
        }
    }
}
