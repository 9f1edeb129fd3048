use url::Url;

const BRAND_NAME: &str = "Wavy Receipts";

fn origin_label(app_origin: &str) -> String {
    Url::parse(app_origin)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()))
        .unwrap_or_else(|| app_origin.to_string())
}

pub fn primary_button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{url}" style="display:inline-block;padding:12px 18px;background-color:#111827;color:#ffffff;text-decoration:none;border-radius:8px;font-weight:600;">{label}</a>"#
    )
}

/// Rendered email ready to hand to an `EmailSender`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn pro_key_email(app_origin: &str, pro_key: &str) -> EmailContent {
    let subject = format!("Your {} Pro Key", BRAND_NAME);
    let text = format!(
        "Thank you for your purchase! Your Pro Key is: {pro_key}. Use this key on any device to unlock Pro features."
    );

    let headline = "Thank you for your purchase!";
    let lead = format!("Your Pro Key is: <strong>{pro_key}</strong>");
    let button = primary_button(app_origin, "Open Wavy Receipts");
    let body = format!(
        r#"<p style="margin:12px 0;color:#374151;">Use this key on any device to unlock Pro features.</p>{button}"#
    );
    let reason = format!("you bought {} Pro", BRAND_NAME);

    let html = wrap_email(app_origin, headline, &lead, &body, &reason);
    EmailContent {
        subject,
        text,
        html,
    }
}

pub fn wrap_email(
    app_origin: &str,
    headline: &str,
    lead: &str,
    body_html: &str,
    reason: &str,
) -> String {
    let origin = origin_label(app_origin);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="background:#f8fafc;margin:0;padding:24px;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:560px;margin:0 auto;background:#ffffff;border:1px solid #e5e7eb;border-radius:12px;padding:24px;">
      <div style="font-size:12px;letter-spacing:0.08em;text-transform:uppercase;color:#6b7280;">{brand} - {origin}</div>
      <h1 style="margin:12px 0 8px;font-size:22px;color:#111827;">{headline}</h1>
      <p style="margin:0 0 12px;font-size:15px;color:#111827;line-height:1.6;">{lead}</p>
      {body_html}
      <div style="margin-top:20px;padding-top:16px;border-top:1px solid #e5e7eb;">
        <p style="margin:0;font-size:13px;color:#4b5563;">Why you got this email: {reason}.</p>
      </div>
      <p style="margin:14px 0 0;font-size:12px;color:#9ca3af;">Sent by {brand} - {origin}</p>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
    )
}
