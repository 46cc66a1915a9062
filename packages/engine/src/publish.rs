//! Write-back of the hidden-route set to the device.

use routevis_wire::encode_hidden;

use crate::config::SourceId;
use crate::error::Result;
use crate::host::RouteHost;
use crate::registry::ToggleRegistry;

/// Encode the registry's non-visible keys and push them to the hidden sink.
///
/// With no sink configured the write is skipped with a warning: visibility
/// still changed locally, there is just nowhere to push it. A failed write
/// comes back as an error and is not retried; the local flags stand either
/// way, because they record the user's intent.
pub(crate) fn publish<H: RouteHost>(
    registry: &ToggleRegistry,
    host: &mut H,
    hidden_source: Option<&SourceId>,
) -> Result<()> {
    let Some(source) = hidden_source else {
        tracing::warn!("No hidden-route sink configured, cannot update the device");
        return Ok(());
    };

    let encoded = encode_hidden(registry.hidden_keys());
    tracing::debug!("Updating hidden routes: {:?}", encoded);

    if let Err(err) = host.write_value(source, &encoded) {
        tracing::warn!("Hidden-route write to {} failed: {}", source, err);
        return Err(err.into());
    }
    Ok(())
}
