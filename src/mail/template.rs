//! HTML and plain-text rendering of the contact notification.

use crate::domain::Submission;
use crate::mail::Email;

pub const SUBJECT: &str = "New Contact Form Submission - VastraFlow";

/// Numbers are collected without the country code, it is added when rendering.
const COUNTRY_CODE: &str = "+91";

const STYLE: &str = r#"
        body { font-family: "Segoe UI", Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #333; background-color: #f4f4f4; margin: 0; padding: 0; }
        .email-container { max-width: 600px; margin: 20px auto; background: #ffffff; border-radius: 10px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
        .email-header { background: linear-gradient(135deg, #FF9933 0%, #FF512F 100%); color: #ffffff; padding: 30px; text-align: center; }
        .email-header h1 { margin: 0; font-size: 28px; font-weight: 700; }
        .email-header p { margin: 10px 0 0; font-size: 14px; opacity: 0.9; }
        .email-body { padding: 30px; }
        .info-box { background: #FFF9F0; border-left: 4px solid #FF9933; padding: 15px 20px; margin-bottom: 20px; border-radius: 5px; }
        .info-box h3 { margin: 0 0 10px; color: #D32F2F; font-size: 14px; text-transform: uppercase; letter-spacing: 1px; }
        .info-box p { margin: 0; color: #333; font-size: 16px; }
        .message-box { background: #f9f9f9; border: 1px solid #e0e0e0; padding: 20px; border-radius: 5px; margin-top: 20px; }
        .message-box h3 { margin: 0 0 15px; color: #D32F2F; font-size: 16px; }
        .message-box p { margin: 0; color: #555; line-height: 1.8; white-space: pre-wrap; }
        .email-footer { background: #222; color: #aaa; text-align: center; padding: 20px; font-size: 12px; }
        .email-footer p { margin: 5px 0; }
        .badge { display: inline-block; background: #FFD700; color: #333; padding: 5px 15px; border-radius: 20px; font-size: 12px; font-weight: 600; margin-top: 10px; }
"#;

pub fn contact_email(submission: &Submission) -> Email {
    Email {
        subject: SUBJECT.into(),
        html_body: html_body(submission),
        text_body: text_body(submission),
    }
}

fn html_body(submission: &Submission) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New Contact Form Submission</title>
    <style>{style}</style>
</head>
<body>
    <div class="email-container">
        <div class="email-header">
            <h1>🎉 New Contact Form Submission</h1>
            <p>Someone wants to connect with you!</p>
            <span class="badge">VastraFlow</span>
        </div>
        <div class="email-body">
            <div class="info-box">
                <h3>👤 Name</h3>
                <p>{name}</p>
            </div>
            <div class="info-box">
                <h3>📞 Phone Number</h3>
                <p><a href="tel:{code}{phone}" style="color: #FF9933; text-decoration: none;">{code} {phone}</a></p>
            </div>
            <div class="message-box">
                <h3>💬 Message</h3>
                <p>{message}</p>
            </div>
        </div>
        <div class="email-footer">
            <p><strong>VastraFlow</strong> - Simplifying Ethnic Rental Businesses</p>
            <p style="margin-top: 15px; font-size: 11px;">This email was sent from your VastraFlow contact form.</p>
        </div>
    </div>
</body>
</html>
"#,
        style = STYLE,
        name = submission.name.escaped(),
        code = COUNTRY_CODE,
        phone = submission.phone.escaped(),
        message = submission.message.escaped().with_line_breaks(),
    )
}

fn text_body(submission: &Submission) -> String {
    format!(
        "Name: {}\nPhone: {} {}\nMessage: {}",
        submission.name.escaped(),
        COUNTRY_CODE,
        submission.phone.escaped(),
        submission.message.escaped(),
    )
}

#[cfg(test)]
mod tests {
    use super::{contact_email, SUBJECT};
    use crate::domain::Submission;

    fn submission(message: &str) -> Submission {
        Submission::parse("Asha <Rao>", "9876543210", message).unwrap()
    }

    #[test]
    fn the_subject_is_fixed() {
        assert_eq!(contact_email(&submission("Hi")).subject, SUBJECT);
    }

    #[test]
    fn the_html_body_never_contains_raw_markup_from_the_visitor() {
        let email = contact_email(&submission("<script>steal()</script>"));

        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;steal()&lt;/script&gt;"));
        assert!(email.html_body.contains("Asha &lt;Rao&gt;"));
    }

    #[test]
    fn the_phone_is_rendered_as_a_dialable_link() {
        let email = contact_email(&submission("Hi"));

        assert!(email.html_body.contains(r#"href="tel:+919876543210""#));
        assert!(email.html_body.contains("+91 9876543210</a>"));
    }

    #[test]
    fn message_line_breaks_are_kept_in_html() {
        let email = contact_email(&submission("Line one\nLine two"));
        assert!(email.html_body.contains("Line one<br />\nLine two"));
    }

    #[test]
    fn the_text_body_lists_every_field() {
        let email = contact_email(&submission("Need a lehenga for Saturday"));

        assert_eq!(
            email.text_body,
            "Name: Asha &lt;Rao&gt;\nPhone: +91 9876543210\nMessage: Need a lehenga for Saturday"
        );
    }
}
