//! Input checks for the create and update commands.

use anyhow::{bail, Result};
use dirhubapp::model::{DirectoryPatch, NewDirectory};

use super::setup::{CreateArgs, UpdateArgs};

/// Lowercase, dash-separated slug built from the ASCII letters and digits of `name`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("slug cannot be empty");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!(
            "invalid slug '{}': use lowercase letters, digits and dashes only",
            slug
        );
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("directory name is required");
    }
    Ok(name.to_string())
}

pub fn new_directory(args: &CreateArgs) -> Result<NewDirectory> {
    let name = validate_name(&args.name)?;
    let slug = match &args.slug {
        Some(slug) => slug.trim().to_string(),
        None => slugify(&name),
    };
    validate_slug(&slug)?;
    Ok(NewDirectory {
        name,
        slug,
        description: args.description.trim().to_string(),
        category: args.category.clone(),
    })
}

pub fn directory_patch(args: &UpdateArgs) -> Result<DirectoryPatch> {
    let name = args.name.as_deref().map(validate_name).transpose()?;
    if let Some(slug) = &args.slug {
        validate_slug(slug)?;
    }
    let patch = DirectoryPatch {
        name,
        slug: args.slug.clone(),
        description: args.description.clone(),
        status: args.status,
        views: None,
        category: args.category.clone(),
    };
    if patch.is_empty() {
        bail!("nothing to update: pass at least one of --name, --description, --slug, --status, --category");
    }
    Ok(patch)
}
