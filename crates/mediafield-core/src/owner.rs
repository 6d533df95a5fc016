//! The `MediaOwner` capability trait.
//!
//! A model object that carries a media field implements this trait instead
//! of exposing dynamically-named attributes. The image attribute holds the
//! canonical filename shared by every stored variant; the video attribute
//! holds a provider-tagged reference string (see [`crate::video`]).

use crate::MediaError;
use async_trait::async_trait;

/// Capability interface for model objects that own a media field.
///
/// Implementing this trait is what the pipeline requires of an owner: the
/// existence of the image/video attributes is a compile-time property
/// rather than a runtime attribute lookup. `save` persists the owner
/// through whatever ORM the host application uses; failures surface as
/// [`MediaError::Persistence`].
#[async_trait]
pub trait MediaOwner: Send {
    /// Stable identifier used as the root of all storage keys for this
    /// owner.
    fn object_id(&self) -> String;

    /// Canonical filename of the stored image, if any.
    fn media_image(&self) -> Option<&str>;

    /// Set or clear the stored image filename. Only the upload pipeline
    /// mutates this attribute.
    fn set_media_image(&mut self, filename: Option<String>);

    /// The raw (possibly provider-tagged) video reference, if any.
    fn media_video(&self) -> Option<&str>;

    /// Persist the owner's current attribute state.
    async fn save(&mut self) -> Result<(), MediaError>;
}
