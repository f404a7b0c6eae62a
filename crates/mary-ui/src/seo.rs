//! JSON-LD structured data in the document head.

use leptos::prelude::*;
use leptos_meta::Script;
use mary_core::SiteConfig;
use mary_seo::{StructuredData, script_body};

/// One structured-data document.
#[component]
pub fn JsonLd(kind: StructuredData, #[prop(into)] config: Signal<SiteConfig>) -> impl IntoView {
    let body = config.with_untracked(|config| script_body(&kind.to_value(config)));
    view! {
      <Script id=kind.id() type_="application/ld+json">
        {body}
      </Script>
    }
}

/// Organization, local business and website documents.
#[component]
pub fn SiteStructuredData(#[prop(into)] config: Signal<SiteConfig>) -> impl IntoView {
    StructuredData::ALL
        .into_iter()
        .map(|kind| view! { <JsonLd kind=kind config=config /> })
        .collect_view()
}
