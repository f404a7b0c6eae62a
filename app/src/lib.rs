use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use mary_core::{NavItem, SiteConfig, navigation};
use mary_ui::{Header, HeroSection, SiteStructuredData};

const SITE_TOML: &str = include_str!("../../site.toml");

/// Site configuration embedded at build time.
///
/// Falls back to the built-in defaults when the file doesn't parse or
/// validate, so a bad edit never blanks the site.
pub fn site_config() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("invalid site.toml, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = site_config();
    let site = config.site.clone();
    provide_context(config.clone());

    view! {
      <Html attr:lang=site.language.clone() />
      <Title text=site.title.clone() />
      <Meta name="description" content=site.description.clone() />
      <Meta name="keywords" content=site.keywords.join(", ") />
      <Meta name="author" content=site.name.clone() />
      <Meta name="viewport" content="width=device-width, initial-scale=1" />
      <Stylesheet id="leptos" href="/pkg/mary.css" />
      <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />
      <SiteStructuredData config=config />

      <Router>
        <main class="font-sans">
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=HomePage />
            <Route
              path=StaticSegment("agence")
              view=|| view! { <InnerPage path="/agence" heading="AGENCE" /> }
            />
            <Route
              path=StaticSegment("projets")
              view=|| view! { <InnerPage path="/projets" heading="PROJETS" /> }
            />
            <Route
              path=StaticSegment("contact")
              view=|| view! { <InnerPage path="/contact" heading="CONTACT" /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

/// Header over the hero, followed by the portfolio anchor the CTA targets.
///
/// The navigation is passed exactly as configured, so `site.toml` decides
/// which item is highlighted on the home page.
#[component]
fn HomePage() -> impl IntoView {
    let config = use_site_config();

    view! {
      <div class="min-h-screen bg-black">
        <Header
          items=config.navigation.clone()
          transparent=config.header.transparent
          contact=config.contact.clone()
          logo_text=config.site.logo_text.clone()
          tagline=config.site.tagline.clone()
        />
        <HeroSection hero=config.hero.clone() />
        <section id="portfolio" class="min-h-screen bg-white text-black px-8 py-32">
          <h2 class="text-4xl font-bold uppercase tracking-wide text-center">"Projets"</h2>
        </section>
      </div>
    }
}

/// Pages without a hero get a solid header from the start.
#[component]
fn InnerPage(path: &'static str, heading: &'static str) -> impl IntoView {
    let config = use_site_config();
    let items = inner_navigation(&config, path);

    view! {
      <div class="min-h-screen bg-white text-black">
        <Header
          items=items
          transparent=false
          contact=config.contact.clone()
          logo_text=config.site.logo_text.clone()
          tagline=config.site.tagline.clone()
        />
        <section class="pt-40 px-8">
          <h1 class="text-4xl md:text-6xl font-bold uppercase tracking-wide text-center">
            {heading}
          </h1>
        </section>
      </div>
    }
}

/// Navigation for an inner page: the item pointing at `path` is the
/// highlighted one.
fn inner_navigation(config: &SiteConfig, path: &str) -> Vec<NavItem> {
    navigation::mark_active(&config.navigation, path)
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <div class="min-h-screen flex items-center justify-center bg-black text-white">
        <a href="/" class="uppercase tracking-wider">"Page introuvable - retour à l'accueil"</a>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(SITE_TOML).expect("site.toml should be valid");
        assert_eq!(config.site.title, "Mary Agency - Premium Communication Agency");
        assert_eq!(config.navigation.len(), 4);
        assert_eq!(navigation::active_index(&config.navigation), Some(0));
        assert_eq!(config.hero.cta_href, "#portfolio");
    }

    #[test]
    fn test_site_config_matches_embedded_file() {
        assert_eq!(site_config().site.language, "fr");
        assert_eq!(site_config().contact.tel_href(), "tel:+33658773330");
    }

    #[test]
    fn test_inner_navigation_highlights_its_page() {
        let config = site_config();
        let items = inner_navigation(&config, "/agence");
        assert_eq!(navigation::active_index(&items), Some(1));
        assert_eq!(items[1].href, "/agence");
    }
}
