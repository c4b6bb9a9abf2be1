//! Structural delta computation and application.

use crate::template::{Template, ValidationError};
use crate::value::{Map, Value};
use crate::view::{Field, MappingView};
use std::collections::BTreeSet;

/// Computes the minimal delta turning `old` into `new`.
///
/// Both views must share the same type name and template; otherwise this
/// fails with IncompatibleDelta before anything is computed. The result is
/// a mapping view over the same template in which an absent key means
/// "unchanged", a null means "delete on apply", an object field whose data
/// changed holds a recursive sub-delta, and a changed sequence holds the
/// entire new sequence (sequences are replaced wholesale, never
/// item-diffed).
///
/// Null doubles as the deletion marker, so a field legitimately storing an
/// explicit null is indistinguishable from a deletion instruction: the
/// round trip `apply_delta(old, compute_delta(old, new))` reconstructs
/// `new` exactly when neither document stores an explicit null at a
/// diffed key.
///
/// Fixed-shape templates are diffed over their declared fields only;
/// wildcard and unconstrained templates are diffed over the union of keys
/// present in either document.
pub fn compute_delta(old: &MappingView, new: &MappingView) -> Result<MappingView, ValidationError> {
    if old.type_name() != new.type_name() || old.template() != new.template() {
        return Err(ValidationError::incompatible_delta(
            old.type_name(),
            new.type_name(),
        ));
    }

    let mut delta = Map::new();
    for key in delta_keys(old, new) {
        let in_old = old.has_key(&key);
        let in_new = new.has_key(&key);

        if in_old && in_new {
            match (old.get_key(&key)?, new.get_key(&key)?) {
                (Field::Mapping(old_field), Field::Mapping(new_field)) => {
                    if old_field.data() != new_field.data() {
                        let sub = compute_delta(&old_field, &new_field)?;
                        delta.set(key, sub.into());
                    }
                }
                (Field::Sequence(old_field), Field::Sequence(new_field)) => {
                    if old_field.data() != new_field.data() {
                        delta.set(key, new_field.into());
                    }
                }
                (old_field, new_field) => {
                    let old_value = old_field.into_value();
                    let new_value = new_field.into_value();
                    if new_value != old_value {
                        delta.set(key, new_value);
                    }
                }
            }
        } else if in_old {
            delta.set(key, Value::Null);
        } else if in_new {
            if let Some(value) = new.data().get(&key) {
                delta.set(key, value.clone());
            }
        }
    }

    MappingView::new(old.type_name(), old.template().clone(), delta)
}

/// Applies a delta against `old`, producing a new, independent view.
///
/// The original is deep-copied and left untouched. Null entries delete the
/// key from the copy if it is contained (an explicitly-null key stays in
/// place); object-shaped entries recurse as sub-deltas when the copy holds
/// an object at that key, and are installed wholesale when it does not;
/// everything else is written through the validating setter, covering
/// replacement and addition.
pub fn apply_delta(old: &MappingView, delta: &MappingView) -> Result<MappingView, ValidationError> {
    let mut updated = old.clone();
    for (key, raw) in delta.data().iter() {
        if raw.is_null() {
            if updated.has_key(key) {
                updated.remove_key(key)?;
            }
            continue;
        }
        match delta.get_key(key)? {
            Field::Mapping(sub) => match updated.get_key(key)? {
                Field::Mapping(current) => {
                    let merged = apply_delta(&current, &sub)?;
                    updated.set_key(key.clone(), merged)?;
                }
                _ => {
                    updated.set_key(key.clone(), sub)?;
                }
            },
            _ => {
                updated.set_key(key.clone(), raw.clone())?;
            }
        }
    }
    Ok(updated)
}

/// The keys a delta is computed over.
fn delta_keys(old: &MappingView, new: &MappingView) -> Vec<String> {
    match old.template() {
        Template::FixedObject(fields) => fields.keys().cloned().collect(),
        _ => {
            let mut keys: BTreeSet<String> =
                old.data().iter().map(|(key, _)| key.clone()).collect();
            keys.extend(new.data().iter().map(|(key, _)| key.clone()));
            keys.into_iter().collect()
        }
    }
}
