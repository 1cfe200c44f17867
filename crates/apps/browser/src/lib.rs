//! Mock web browser panel: an address bar over an embedded frame.

use leptos::*;
use phone_app_contract::AppMountContext;
use system_ui::prelude::*;

const HOME_URL: &str = "https://example.com";

/// Turns address-bar input into a loadable URL.
///
/// Blank input yields `None`. Input without an `http`/`https` scheme is treated as a host name.
fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed.trim_start_matches('/')))
    }
}

/// Address-bar text for a loaded URL: the scheme and a bare trailing slash are hidden.
fn display_url(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}

#[component]
/// Browser panel contents.
pub fn BrowserApp(
    /// Runtime mount context.
    context: AppMountContext,
) -> impl IntoView {
    let navigation = context.services.navigation.clone();
    let url = create_rw_signal(HOME_URL.to_string());
    let address = create_rw_signal(display_url(HOME_URL));

    let go = move || match normalize_url(&address.get_untracked()) {
        Some(next) => {
            logging::log!("browser navigating to {next}");
            address.set(display_url(&next));
            url.set(next);
        }
        None => address.set(display_url(&url.get_untracked())),
    };

    view! {
        <div class="app app-browser">
            <PanelHeader
                title=context.display_name.clone()
                on_back=Callback::new(move |_| navigation.close())
            />
            <div class="app-browser-toolbar">
                <TextField
                    variant=FieldVariant::Pill
                    leading_icon=IconName::Globe
                    input_type="url"
                    aria_label="アドレス"
                    value=address
                    on_input=Callback::new(move |value: String| address.set(value))
                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            go();
                        }
                    })
                />
            </div>
            <div class="app-browser-viewport">
                <iframe
                    title="ブラウザ"
                    src=move || url.get()
                    sandbox="allow-scripts allow-same-origin allow-forms"
                    referrerpolicy="no-referrer"
                ></iframe>
                <EmptyState
                    icon=IconName::Globe
                    message="iframeの制限によりプレビュー環境では外部サイトの表示が制限される場合があります。"
                >
                    <Text tone=TextTone::Secondary>
                        "実際の運用時はここにWebコンテンツが表示されます。"
                    </Text>
                </EmptyState>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(
            normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            normalize_url("  rust-lang.org/learn "),
            Some("https://rust-lang.org/learn".to_string())
        );
    }

    #[test]
    fn explicit_schemes_are_kept() {
        assert_eq!(
            normalize_url("http://localhost:8080"),
            Some("http://localhost:8080".to_string())
        );
        assert_eq!(
            normalize_url("HTTPS://Example.com"),
            Some("HTTPS://Example.com".to_string())
        );
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   "), None);
    }

    #[test]
    fn address_bar_hides_scheme() {
        assert_eq!(display_url(HOME_URL), "example.com");
        assert_eq!(display_url("http://example.com/"), "example.com");
        assert_eq!(display_url("https://example.com/docs"), "example.com/docs");
    }
}
