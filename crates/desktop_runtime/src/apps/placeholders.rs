//! Built-in internal apps whose full implementations live outside the desktop (mail composer,
//! admin surfaces), plus the not-found view.

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::HostServices;
use platform_host_web::encode_path_segment;

/// Recipient of the mail composer.
pub const CONTACT_EMAIL: &str = "danielslee078@gmail.com";
const DEFAULT_MAIL_SUBJECT: &str = "Portfolio Contact";

/// Builds the `mailto:` URL the composer hands to the external URL service.
pub fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        encode_path_segment(subject),
        encode_path_segment(body)
    )
}

/// Mounts the mail composer.
pub(super) fn mount_mail(context: AppMountContext) -> View {
    view! { <MailApp host=context.host /> }.into_view()
}

#[component]
fn MailApp(host: HostServices) -> impl IntoView {
    let subject = create_rw_signal(DEFAULT_MAIL_SUBJECT.to_string());
    let body = create_rw_signal(String::new());
    let external_urls = store_value(host.external_urls);

    let send = move |_| {
        let url = mailto_url(&subject.get_untracked(), &body.get_untracked());
        let service = external_urls.get_value();
        spawn_local(async move {
            if let Err(err) = service.open_url(&url).await {
                logging::warn!("mail compose failed: {err}");
            }
        });
    };

    view! {
        <div class="app-shell app-mail-shell">
            <strong>"Compose"</strong>
            <div class="app-mail-recipient">{format!("To: {CONTACT_EMAIL}")}</div>
            <input
                type="text"
                aria-label="Subject"
                prop:value=move || subject.get()
                on:input=move |ev| subject.set(event_target_value(&ev))
            />
            <textarea
                rows="10"
                aria-label="Message"
                placeholder="Write your message…"
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            ></textarea>
            <button type="button" class="app-action" on:click=send>
                "Send via Mail"
            </button>
        </div>
    }
}

/// Mounts the admin dashboard placeholder.
pub(super) fn mount_admin_dashboard(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-placeholder-shell">
            <h3>"Admin Dashboard"</h3>
            <p>
                "The signAvenue dashboard UI mounts here as an internal app inside its own window."
            </p>
            <p class="app-muted">"Repo: github.com/e-dvni/signAvenue"</p>
        </div>
    }
    .into_view()
}

/// Mounts the admin CMS placeholder. Editing runs against the authenticated admin API, which
/// this desktop does not host.
pub(super) fn mount_admin_cms(context: AppMountContext) -> View {
    let catalog_size = move || context.catalog.with(Vec::len);
    view! {
        <div class="app-shell app-placeholder-shell">
            <h3>"Admin CMS"</h3>
            <p>"Notes and projects are managed through the authenticated admin API."</p>
            <p class="app-muted">{move || format!("Apps in catalog: {}", catalog_size())}</p>
        </div>
    }
    .into_view()
}

#[component]
/// Visible placeholder for windows whose target cannot be resolved.
pub(crate) fn NotFoundView(message: String) -> impl IntoView {
    view! {
        <div class="app-shell app-not-found" role="alert">
            <strong>"Not found"</strong>
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mailto_targets_the_contact_address() {
        assert_eq!(
            mailto_url("Hello", "Hi"),
            "mailto:danielslee078@gmail.com?subject=Hello&body=Hi"
        );
        assert_eq!(
            mailto_url(DEFAULT_MAIL_SUBJECT, ""),
            format!("mailto:{CONTACT_EMAIL}?subject={DEFAULT_MAIL_SUBJECT}&body=")
        );
    }
}
