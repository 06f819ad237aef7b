use provider_client::PropertySource;
use tracing::debug;

use super::{EntityKind, ImportError, Importer};
use crate::repository::{ImportRepository, NewAttachment};

/// One external-URL image attachment per URL, in input order.
pub fn image_attachments(urls: &[String]) -> Vec<NewAttachment> {
    urls.iter()
        .enumerate()
        .map(|(i, url)| NewAttachment {
            nome: format!("Image {}", i + 1),
            url: url.clone(),
            tipo: "image".to_string(),
            image: true,
            video: false,
            is_external_url: true,
            can_publish: true,
        })
        .collect()
}

impl<S, R> Importer<S, R>
where
    S: PropertySource,
    R: ImportRepository,
{
    /// Replace every attachment of the property with the given image list.
    pub async fn sync_attachments(
        &self,
        imovel_id: i32,
        image_urls: &[String],
    ) -> Result<usize, ImportError> {
        let attachments = image_attachments(image_urls);
        let inserted = self
            .repo
            .replace_property_attachments(imovel_id, &attachments)
            .await
            .map_err(ImportError::persistence(EntityKind::Attachment))?;

        debug!(imovel_id, count = inserted, "Synced attachments");
        Ok(inserted)
    }
}
