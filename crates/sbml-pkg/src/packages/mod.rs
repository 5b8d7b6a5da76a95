// crates/sbml-pkg/src/packages/mod.rs

//! Element classes of the SBML Level 3 packages.

/// `id` and `name` accessors over `String` fields of the same names.
/// `id_name_accessors!(id)` emits the `id` half only.
macro_rules! id_name_accessors {
    (id) => {
        pub fn id(&self) -> &str {
            &self.id
        }

        pub fn is_set_id(&self) -> bool {
            !self.id.is_empty()
        }

        pub fn set_id(&mut self, id: &str) -> $crate::status::OperationResult {
            $crate::sbase::assign_sid(&mut self.id, id)
        }

        pub fn unset_id(&mut self) -> $crate::status::OperationResult {
            self.id.clear();
            Ok(())
        }
    };
    () => {
        $crate::packages::id_name_accessors!(id);

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn is_set_name(&self) -> bool {
            !self.name.is_empty()
        }

        pub fn set_name(&mut self, name: &str) -> $crate::status::OperationResult {
            self.name = alloc::string::ToString::to_string(name);
            Ok(())
        }

        pub fn unset_name(&mut self) -> $crate::status::OperationResult {
            self.name.clear();
            Ok(())
        }
    };
}

/// Accessors for `Option<f64>` fields. Unset values read as NaN.
macro_rules! double_accessors {
    ($($field:ident, $is_set:ident, $set:ident, $unset:ident;)*) => {
        $(
            pub fn $field(&self) -> f64 {
                self.$field.unwrap_or(f64::NAN)
            }

            pub fn $is_set(&self) -> bool {
                self.$field.is_some()
            }

            pub fn $set(&mut self, value: f64) -> $crate::status::OperationResult {
                self.$field = Some(value);
                Ok(())
            }

            pub fn $unset(&mut self) -> $crate::status::OperationResult {
                self.$field = None;
                Ok(())
            }
        )*
    };
}

pub(crate) use double_accessors;
pub(crate) use id_name_accessors;

pub mod distrib;
pub mod fbc;
pub mod foo;
pub mod spatial;
pub mod tsb;
pub mod vers;
