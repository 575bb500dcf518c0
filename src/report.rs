// ABOUTME: Report sections for containers, images, volumes and networks.
// ABOUTME: Lists each resource kind, then writes its banner and aligned table.

use crate::error::{Error, Result};
use crate::output::{Table, banner};
use crate::runtime::{ContainerSummary, ImageSummary, Inventory, NetworkSummary, VolumeSummary};
use std::io::{self, Write};
use tracing::debug;

/// Characters of a container ID shown in the table.
pub const CONTAINER_ID_LEN: usize = 10;
/// Characters of an image digest shown in the table.
pub const IMAGE_ID_LEN: usize = 5;
/// Characters of a network ID shown in the table.
pub const NETWORK_ID_LEN: usize = 8;

/// Shown for a container without an assigned name.
pub const NO_NAME: &str = "<none>";
/// Shown for an image without a repository tag.
pub const NO_TAG: &str = "<none>:<none>";

/// The resource kinds the report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Containers,
    Images,
    Volumes,
    Networks,
}

impl ResourceKind {
    /// Report order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Containers,
        ResourceKind::Images,
        ResourceKind::Volumes,
        ResourceKind::Networks,
    ];

    /// Banner text for the section.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Containers => "CONTAINERS",
            ResourceKind::Images => "IMAGES",
            ResourceKind::Volumes => "VOLUMES",
            ResourceKind::Networks => "NETWORKS",
        }
    }

    /// Table header for the section.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Containers => &["ID", "Image", "Name", "State", "Status"],
            ResourceKind::Images => &["ID", "RepoTags"],
            ResourceKind::Volumes => &["Driver", "Name", "refCount"],
            ResourceKind::Networks => &["ID", "Name", "Driver"],
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Containers => write!(f, "containers"),
            ResourceKind::Images => write!(f, "images"),
            ResourceKind::Volumes => write!(f, "volumes"),
            ResourceKind::Networks => write!(f, "networks"),
        }
    }
}

// =============================================================================
// Row projections
// =============================================================================

pub fn container_row(c: &ContainerSummary) -> [String; 5] {
    [
        c.id.truncated(CONTAINER_ID_LEN).to_string(),
        c.image.clone(),
        c.name.clone().unwrap_or_else(|| NO_NAME.to_string()),
        c.state.clone(),
        c.status.clone(),
    ]
}

pub fn image_row(i: &ImageSummary) -> [String; 2] {
    [
        i.id.short_digest(IMAGE_ID_LEN).to_string(),
        i.repo_tags
            .first()
            .cloned()
            .unwrap_or_else(|| NO_TAG.to_string()),
    ]
}

pub fn volume_row(v: &VolumeSummary) -> [String; 3] {
    [
        v.driver.clone(),
        v.name.clone(),
        v.ref_count.unwrap_or(0).to_string(),
    ]
}

pub fn network_row(n: &NetworkSummary) -> [String; 3] {
    [
        n.id.short_digest(NETWORK_ID_LEN).to_string(),
        n.name.clone(),
        n.driver.clone(),
    ]
}

// =============================================================================
// Sections
// =============================================================================

/// List `kind` from the runtime and project the records into a table.
pub async fn table<R>(kind: ResourceKind, runtime: &R) -> Result<Table>
where
    R: Inventory + ?Sized,
{
    let mut table = Table::new(kind.columns().iter().copied());
    match kind {
        ResourceKind::Containers => {
            let containers = runtime
                .list_containers()
                .await
                .map_err(|e| Error::list(kind, e))?;
            for c in &containers {
                table.push_row(container_row(c));
            }
        }
        ResourceKind::Images => {
            let images = runtime
                .list_images()
                .await
                .map_err(|e| Error::list(kind, e))?;
            for i in &images {
                table.push_row(image_row(i));
            }
        }
        ResourceKind::Volumes => {
            let volumes = runtime
                .list_volumes()
                .await
                .map_err(|e| Error::list(kind, e))?;
            for v in &volumes {
                table.push_row(volume_row(v));
            }
        }
        ResourceKind::Networks => {
            let networks = runtime
                .list_networks()
                .await
                .map_err(|e| Error::list(kind, e))?;
            for n in &networks {
                table.push_row(network_row(n));
            }
        }
    }
    Ok(table)
}

/// Banner for `label`, or empty text when figlet cannot render it.
pub fn banner_text(label: &str) -> String {
    banner::render(label).unwrap_or_else(|e| {
        debug!(label, error = %e, "banner rendering failed");
        String::new()
    })
}

/// Write a rendered section: banner, blank line, table, blank line.
pub fn write_section<W: Write>(label: &str, table: &Table, out: &mut W) -> io::Result<()> {
    write!(out, "{}", banner_text(label))?;
    writeln!(out)?;
    table.write_to(out)?;
    writeln!(out)
}

/// List `kind` and write its section.
///
/// The listing happens first, so a failed listing writes nothing for this section.
pub async fn render_section<R, W>(kind: ResourceKind, runtime: &R, out: &mut W) -> Result<()>
where
    R: Inventory + ?Sized,
    W: Write,
{
    let table = table(kind, runtime).await?;
    write_section(kind.label(), &table, out)?;
    Ok(())
}

/// Write every section in report order, stopping at the first failure.
pub async fn render_all<R, W>(runtime: &R, out: &mut W) -> Result<()>
where
    R: Inventory + ?Sized,
    W: Write,
{
    for kind in ResourceKind::ALL {
        render_section(kind, runtime, out).await?;
    }
    Ok(())
}
