use crate::model::{
    BuildConfig, Customizations, DevContainer, Mount, PortAttributes, Secret, WatchConfig,
};

use super::{DocumentedType, DocumentedTypeProvider};

/// Central registry of every configuration type that gets a documentation page.
pub struct TypeRegistry;

impl TypeRegistry {
    /// Returns all registered types in page order.
    pub fn get_all() -> Vec<DocumentedType> {
        vec![
            Self::get_type::<DevContainer>(),
            Self::get_type::<BuildConfig>(),
            Self::get_type::<Mount>(),
            Self::get_type::<PortAttributes>(),
            Self::get_type::<Secret>(),
            Self::get_type::<WatchConfig>(),
            Self::get_type::<Customizations>(),
        ]
    }

    /// Looks up a registered type by name, ignoring ASCII case.
    pub fn get_type_by_name(name: &str) -> Option<DocumentedType> {
        Self::get_all()
            .into_iter()
            .find(|documented| documented.name.eq_ignore_ascii_case(name))
    }

    /// Returns the names of all registered types.
    pub fn list_type_names() -> Vec<String> {
        Self::get_all()
            .into_iter()
            .map(|documented| documented.name)
            .collect()
    }

    fn get_type<T: DocumentedTypeProvider>() -> DocumentedType {
        T::documented_type()
    }
}
