//! Generator trees mirroring built payloads

use battle_core::{Object, Value};
use battle_valuegen::ValueGenerator;
use indexmap::IndexMap;
use rand::RngCore;

/// The generators behind a payload, shaped exactly like the payload.
#[derive(Debug)]
pub enum GeneratorTree {
    Leaf(Box<dyn ValueGenerator>),
    Object(IndexMap<String, GeneratorTree>),
}

impl GeneratorTree {
    /// Draw a complete fresh payload from every leaf generator.
    pub fn redraw(&self, rng: &mut dyn RngCore) -> Value {
        match self {
            GeneratorTree::Leaf(gen) => gen.next(rng).value,
            GeneratorTree::Object(children) => Value::Object(
                children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.redraw(rng)))
                    .collect::<Object>(),
            ),
        }
    }

    pub fn as_leaf(&self) -> Option<&dyn ValueGenerator> {
        match self {
            GeneratorTree::Leaf(gen) => Some(gen.as_ref()),
            GeneratorTree::Object(_) => None,
        }
    }

    pub fn children(&self) -> Option<&IndexMap<String, GeneratorTree>> {
        match self {
            GeneratorTree::Object(children) => Some(children),
            GeneratorTree::Leaf(_) => None,
        }
    }

    /// Follow property names down from this node.
    pub fn get(&self, path: &[&str]) -> Option<&GeneratorTree> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self.children()?.get(*head)?.get(rest),
        }
    }

    /// Every leaf generator with its dotted path, in declaration order.
    pub fn leaves(&self) -> Vec<(String, &dyn ValueGenerator)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a dyn ValueGenerator)>) {
        match self {
            GeneratorTree::Leaf(gen) => out.push((prefix.to_string(), gen.as_ref())),
            GeneratorTree::Object(children) => {
                for (name, child) in children {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    child.collect_leaves(&path, out);
                }
            }
        }
    }

    /// True when `value` has the same object keys, in the same order, at
    /// every level. Leaves match any value.
    pub fn same_shape(&self, value: &Value) -> bool {
        match (self, value) {
            (GeneratorTree::Leaf(_), _) => true,
            (GeneratorTree::Object(children), Value::Object(map)) => {
                children.len() == map.len()
                    && children
                        .iter()
                        .zip(map.iter())
                        .all(|((gk, gv), (vk, vv))| gk == vk && gv.same_shape(vv))
            }
            (GeneratorTree::Object(_), _) => false,
        }
    }
}
