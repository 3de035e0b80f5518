use crate::db::escape_html;
use crate::models::PortfolioDatabase;
use crate::render::{contact_cards, photo_card};
use crate::widgets::{Lightbox, Target, UiEvent, WidgetError, WidgetHost};

use super::{Page, PageView, RenderContext, ViewSlot};

pub fn render_contact(
    db: &PortfolioDatabase,
    ctx: &RenderContext<'_>,
    host: &mut WidgetHost,
    view: &mut PageView,
) -> Result<(), WidgetError> {
    let photo_src = db
        .profile
        .photo
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(ctx.site.photo_fallback.as_str());

    view.slot("contactGrid").render(format!(
        "{}{}",
        photo_card(photo_src),
        contact_cards(&db.profile.contacts)
    ));

    let mut lightbox = host.attach(Lightbox::new(photo_src))?;
    if ctx.query.photo_open() {
        lightbox.dispatch(&UiEvent::Click(Target::Photo));
    }

    let close_href = ctx.query.href_with(Page::Contact.path(), |q| q.photo = None);
    let open_class = if lightbox.is_open() { " open" } else { "" };
    view.slot("photoModal").render(format!(
        r#"<div class="modal{open_class}" id="photoModal" aria-hidden="{}"><a class="modal-backdrop" data-close="true" href="{close}"></a><div class="modal-content"><a class="modal-close" id="photoModalClose" href="{close}" aria-label="Close">×</a><img id="photoModalImg" src="{}" alt="Profile photo" /></div></div>"#,
        lightbox.aria_hidden(),
        escape_html(lightbox.modal_src()),
        close = escape_html(&close_href),
    ));
    Ok(())
}
