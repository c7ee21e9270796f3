//! `preview list` rendering

use sidekick::DeploymentRecord;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_preview_list(record: &DeploymentRecord, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Preview.colored(supports_color, supports_unicode),
        ColoredText::info(format!("Previews of {}", record.name))
            .bold()
            .render(supports_color)
    );

    if record.preview_environments.is_empty() {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim("No previews yet. Run `sidekick preview` on a clean commit.")
                .render(supports_color)
        ));
        return out;
    }

    let width = record
        .preview_environments
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);
    for (revision, preview) in &record.preview_environments {
        out.push_str(&format!(
            "  {:<width$}  {}  {}\n",
            revision,
            preview.url,
            ColoredText::dim(preview.created_at.to_string()).render(supports_color),
        ));
    }
    out
}

pub fn preview_list_json(record: &DeploymentRecord) -> serde_json::Value {
    let previews: Vec<_> = record
        .preview_environments
        .iter()
        .map(|(revision, preview)| {
            serde_json::json!({
                "revision": revision,
                "url": preview.url,
                "image": preview.image,
                "created_at": preview.created_at.as_str(),
            })
        })
        .collect();

    serde_json::json!({
        "event": "preview_list",
        "command": "preview",
        "app": record.name.as_str(),
        "previews": previews,
    })
}
