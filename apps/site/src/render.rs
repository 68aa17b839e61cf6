//! Presentation tree rendered to a single HTML5 document.
//!
//! Sections are emitted in `Section::ALL` order. Every piece of dynamic text
//! goes through `escape_html`; static markup does not.

use std::path::Path;

use anyhow::{Context, Result};

use crate::contact::form::{Field, FormState, SubmissionStatus};
use crate::contact::notification::Notification;
use crate::content::{
    AchievementMetric, Competency, ExperienceEntry, Icon, ACHIEVEMENTS, COMPETENCIES,
    DIRECT_CONTACTS, EXPERIENCE, PROFILE,
};
use crate::navigation::{NavState, Section};

/// Everything that varies between two renders of the page.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub nav: NavState,
    pub form: FormState,
    pub status: SubmissionStatus,
    /// Result of the last submit, shown above the form.
    pub notification: Option<Notification>,
}

pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} — {}</title>\n</head>\n<body>\n",
        escape_html(PROFILE.brand),
        escape_html(PROFILE.headline)
    ));

    render_nav(&mut html, &view.nav);
    html.push_str("<main>\n");
    render_hero(&mut html);
    render_about(&mut html);
    render_competencies(&mut html, COMPETENCIES);
    render_experience(&mut html, EXPERIENCE);
    render_achievements(&mut html, ACHIEVEMENTS);
    render_contact(&mut html, view);
    html.push_str("</main>\n");

    html.push_str(&format!(
        "<footer><p>{}</p></footer>\n</body>\n</html>\n",
        escape_html(PROFILE.footer)
    ));
    html
}

pub fn write_page(path: &Path, view: &PageView) -> Result<()> {
    std::fs::write(path, render_page(view))
        .with_context(|| format!("Failed to write page to {}", path.display()))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn icon(icon: Icon) -> String {
    format!("<i class=\"icon\" data-icon=\"{}\"></i>", icon.name())
}

fn render_nav(html: &mut String, nav: &NavState) {
    html.push_str(&format!(
        "<nav>\n<div class=\"brand\">{}</div>\n<ul>\n",
        escape_html(PROFILE.brand)
    ));
    for section in Section::ALL {
        let marker = if nav.is_active(section) {
            " class=\"active\" aria-current=\"true\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"?section={id}#{id}\"{marker}>{label}</a></li>\n",
            id = section.id(),
            label = escape_html(section.label()),
        ));
    }
    html.push_str("</ul>\n</nav>\n");
}

fn render_hero(html: &mut String) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<div class=\"badge\">{}</div>\n<h1>{}</h1>\n<p>{}</p>\n",
        Section::Home.id(),
        escape_html(PROFILE.badge),
        escape_html(PROFILE.headline),
        escape_html(PROFILE.tagline),
    ));
    for (target, text) in [
        (Section::Contact, "Связаться со мной"),
        (Section::About, "Узнать больше"),
    ] {
        html.push_str(&format!(
            "<a class=\"button\" href=\"?section={id}#{id}\">{}</a>\n",
            escape_html(text),
            id = target.id(),
        ));
    }
    html.push_str("</section>\n");
}

fn render_about(html: &mut String) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n",
        Section::About.id(),
        escape_html(Section::About.label())
    ));
    for paragraph in PROFILE.about {
        html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    html.push_str("</section>\n");
}

fn render_competencies(html: &mut String, competencies: &[Competency]) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>Ключевые компетенции</h2>\n",
        Section::Competencies.id()
    ));
    for comp in competencies {
        html.push_str(&format!(
            "<article class=\"card\">{}<h3>{}</h3><p>{}</p></article>\n",
            icon(comp.icon),
            escape_html(comp.title),
            escape_html(comp.description),
        ));
    }
    html.push_str("</section>\n");
}

fn render_experience(html: &mut String, entries: &[ExperienceEntry]) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>Опыт работы</h2>\n",
        Section::Experience.id()
    ));
    for entry in entries {
        html.push_str(&format!(
            "<article class=\"role\">\n<div class=\"period\">{}</div>\n<h3>{}</h3>\n<div class=\"company\">{}</div>\n<ul>\n",
            escape_html(entry.period),
            escape_html(entry.position),
            escape_html(entry.company),
        ));
        for achievement in entry.achievements {
            html.push_str(&format!(
                "<li>{}<span>{}</span></li>\n",
                icon(Icon::CheckCircle2),
                escape_html(achievement)
            ));
        }
        html.push_str("</ul>\n</article>\n");
    }
    html.push_str("</section>\n");
}

fn render_achievements(html: &mut String, metrics: &[AchievementMetric]) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n",
        Section::Achievements.id(),
        escape_html(Section::Achievements.label())
    ));
    for metric in metrics {
        html.push_str(&format!(
            "<div class=\"metric\"><div class=\"number\">{}</div><div class=\"label\">{}</div></div>\n",
            escape_html(metric.number),
            escape_html(metric.label),
        ));
    }
    html.push_str("</section>\n");
}

fn render_notification(html: &mut String, notification: &Notification) {
    let role = if notification.is_error() { "alert" } else { "status" };
    html.push_str(&format!(
        "<div class=\"notification {}\" role=\"{role}\"><strong>{}</strong><p>{}</p></div>\n",
        notification.variant.class_name(),
        escape_html(notification.title),
        escape_html(notification.description),
    ));
}

fn render_contact(html: &mut String, view: &PageView) {
    let form = &view.form;
    let status = view.status;

    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n<p>{}</p>\n",
        Section::Contact.id(),
        escape_html(PROFILE.contact_heading),
        escape_html(PROFILE.contact_lead),
    ));
    if let Some(notification) = &view.notification {
        render_notification(html, notification);
    }
    html.push_str(&format!(
        "<form id=\"contact-form\" method=\"post\" action=\"/#{}\">\n",
        Section::Contact.id()
    ));

    for field in Field::ALL {
        let key = field.key();
        html.push_str(&format!(
            "<label for=\"{key}\">{}</label>\n",
            escape_html(field.label())
        ));
        let value = escape_html(form.get(field));
        let placeholder = escape_html(field.placeholder());
        match field.input_type() {
            Some(kind) => html.push_str(&format!(
                "<input id=\"{key}\" name=\"{key}\" type=\"{kind}\" required placeholder=\"{placeholder}\" value=\"{value}\">\n"
            )),
            None => html.push_str(&format!(
                "<textarea id=\"{key}\" name=\"{key}\" required placeholder=\"{placeholder}\">{value}</textarea>\n"
            )),
        }
    }

    let disabled = if status.is_busy() { " disabled" } else { "" };
    html.push_str(&format!(
        "<button type=\"submit\"{disabled}>{}</button>\n</form>\n",
        escape_html(status.button_label())
    ));

    html.push_str(&format!(
        "<p>{}</p>\n<div class=\"direct-contacts\">\n",
        escape_html(PROFILE.direct_contact_hint)
    ));
    for contact in DIRECT_CONTACTS {
        html.push_str(&format!(
            "<a href=\"{}\">{}<span>{}</span></a>\n",
            escape_html(contact.href),
            icon(contact.icon),
            escape_html(contact.text),
        ));
    }
    html.push_str("</div>\n</section>\n");
}
