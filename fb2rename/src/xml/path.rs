//! Namespace-qualified `//a/b/c` paths over a roxmltree document.

use log::debug;
use roxmltree::{Document, Node};

use crate::error::{Fb2Error, Result};

/// Prefix every unqualified segment of `path` with `prefix`.
///
/// Empty segments (from leading or doubled slashes) and segments that already
/// carry a prefix are left untouched.
pub fn qualify_path(path: &str, prefix: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.is_empty() || segment.contains(':') {
                segment.to_string()
            } else {
                format!("{}:{}", prefix, segment)
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Elements matching `//s1/s2/.../sn`, in document order.
///
/// `namespaces` binds the prefixes used in the path to namespace URIs. A
/// qualified segment also matches elements without any namespace, so a query
/// works the same on documents that never declare their default namespace.
pub(crate) fn select<'a, 'input>(
    doc: &'a Document<'input>,
    path: &str,
    namespaces: &[(&str, &str)],
) -> Result<Vec<Node<'a, 'input>>> {
    let names = compile(path, namespaces)?;

    let matched: Vec<_> = doc
        .descendants()
        .filter(|node| matches_path(*node, &names))
        .collect();

    debug!("Query {} matched {} element(s)", path, matched.len());
    Ok(matched)
}

/// A name test from one path segment.
struct Name<'p> {
    namespace: Option<&'p str>,
    local: &'p str,
}

impl Name<'_> {
    fn matches(&self, node: Node) -> bool {
        if !node.is_element() || node.tag_name().name() != self.local {
            return false;
        }
        match (self.namespace, node.tag_name().namespace()) {
            (_, None) => true,
            (Some(wanted), Some(actual)) => wanted == actual,
            (None, Some(_)) => false,
        }
    }
}

fn compile<'p>(path: &'p str, namespaces: &[(&str, &'p str)]) -> Result<Vec<Name<'p>>> {
    let invalid = || Fb2Error::InvalidQuery(path.to_string());
    let body = path.strip_prefix("//").ok_or_else(invalid)?;

    body.split('/')
        .map(|segment| {
            let (namespace, local) = match segment.split_once(':') {
                Some((prefix, local)) => {
                    let uri = namespaces
                        .iter()
                        .find(|(p, _)| *p == prefix)
                        .map(|(_, uri)| *uri)
                        .ok_or_else(invalid)?;
                    (Some(uri), local)
                }
                None => (None, segment),
            };
            if local.is_empty() || local.contains(':') {
                return Err(invalid());
            }
            Ok(Name { namespace, local })
        })
        .collect()
}

/// The node matches the last name, its parent the one before, and so on.
fn matches_path(node: Node, names: &[Name]) -> bool {
    let mut current = Some(node);
    for name in names.iter().rev() {
        match current {
            Some(n) if name.matches(n) => current = n.parent(),
            _ => return false,
        }
    }
    true
}
