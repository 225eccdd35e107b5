//! Type capability queries.
//!
//! The generator asks a fixed set of questions about types: is this the request context, does it await to
//! something, is it a nullable value type, can it be parsed from a string, does it execute itself as a result.
//! [`TypeCapabilities`] is that question set; [`ClrTypeSystem`] answers it for CLR targets using the injected
//! [`WellKnownTypes`] table and the builtin registry.

use routegen_core::lang::builtins::{self, ClrBuiltinId};
use routegen_core::lang::well_known::{WellKnownRole, WellKnownTypes};

use crate::model::TypeRef;

/// Awaitable classification of a return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwaitableInfo {
    /// Result produced by awaiting; `None` when the awaitable completes without a value.
    pub result_type: Option<TypeRef>,
}

/// Questions the generator asks about target types.
pub trait TypeCapabilities {
    /// Role table used for identity checks.
    fn well_known(&self) -> &WellKnownTypes;

    /// Whether `ty` is exactly the (non-generic) type bound to `role`.
    fn is_role(&self, ty: &TypeRef, role: WellKnownRole) -> bool {
        ty.is(self.well_known().get(role), 0)
    }

    fn is_void(&self, ty: &TypeRef) -> bool {
        ty.is(builtins::full_name(ClrBuiltinId::Void), 0)
    }

    fn is_string(&self, ty: &TypeRef) -> bool {
        ty.is(builtins::full_name(ClrBuiltinId::String), 0)
    }

    /// `Some` if `ty` follows the awaitable protocol.
    fn awaitable(&self, ty: &TypeRef) -> Option<AwaitableInfo>;

    /// Inner value type of an instantiated nullable-of-value-type.
    ///
    /// `None` when the argument is not a value type, since the wrapper cannot be instantiated over one.
    fn nullable_inner<'t>(&self, ty: &'t TypeRef) -> Option<&'t TypeRef>;

    /// Whether `ty` exposes a static `TryParse(string, out T)`.
    fn has_try_parse(&self, ty: &TypeRef) -> bool;

    /// Whether values of `ty` write themselves to the response.
    fn is_executable_result(&self, ty: &TypeRef) -> bool;
}

/// Capability answers for CLR targets.
#[derive(Debug, Clone, Default)]
pub struct ClrTypeSystem {
    well_known: WellKnownTypes,
}

impl ClrTypeSystem {
    pub fn new(well_known: WellKnownTypes) -> Self {
        Self { well_known }
    }

    fn is_task_like(&self, ty: &TypeRef, arity: usize) -> bool {
        [WellKnownRole::Task, WellKnownRole::ValueTask]
            .iter()
            .any(|&role| ty.is(self.well_known.get(role), arity))
    }

    /// Declared value types, plus builtins the registry marks as value types.
    fn is_value_type(&self, ty: &TypeRef) -> bool {
        let Some(named) = ty.as_named() else {
            return false;
        };
        named.value_type
            || (named.type_args.is_empty()
                && builtins::from_full_name(&ty.full_name()).is_some_and(|id| builtins::info_for(id).value_type))
    }

    fn non_void(&self, ty: &TypeRef) -> Option<TypeRef> {
        (!self.is_void(ty)).then(|| ty.clone())
    }
}

impl TypeCapabilities for ClrTypeSystem {
    fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }

    fn awaitable(&self, ty: &TypeRef) -> Option<AwaitableInfo> {
        if self.is_task_like(ty, 0) {
            return Some(AwaitableInfo { result_type: None });
        }
        if self.is_task_like(ty, 1) {
            return Some(AwaitableInfo {
                result_type: ty.type_args().first().and_then(|t| self.non_void(t)),
            });
        }
        let awaits = ty.as_named()?.awaits.as_deref()?;
        Some(AwaitableInfo {
            result_type: self.non_void(awaits),
        })
    }

    fn nullable_inner<'t>(&self, ty: &'t TypeRef) -> Option<&'t TypeRef> {
        if ty.is(self.well_known.get(WellKnownRole::Nullable), 1) {
            ty.type_args().first().filter(|inner| self.is_value_type(inner))
        } else {
            None
        }
    }

    fn has_try_parse(&self, ty: &TypeRef) -> bool {
        let Some(named) = ty.as_named() else {
            return false;
        };
        if named.parsable {
            return true;
        }
        named.type_args.is_empty()
            && builtins::from_full_name(&ty.full_name()).is_some_and(|id| builtins::info_for(id).try_parse)
    }

    fn is_executable_result(&self, ty: &TypeRef) -> bool {
        let result = self.well_known.get(WellKnownRole::ExecutableResult);
        if ty.is(result, 0) {
            return true;
        }
        ty.as_named()
            .is_some_and(|named| named.interfaces.iter().any(|iface| iface == result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps() -> ClrTypeSystem {
        ClrTypeSystem::default()
    }

    fn sys(name: &str) -> TypeRef {
        TypeRef::named("System", name)
    }

    fn task() -> TypeRef {
        TypeRef::named("System.Threading.Tasks", "Task")
    }

    // ========================================
    // Awaitable tests
    // ========================================

    #[test]
    fn test_plain_task_awaits_to_void() {
        assert_eq!(caps().awaitable(&task()), Some(AwaitableInfo { result_type: None }));
    }

    #[test]
    fn test_generic_task_awaits_to_argument() {
        let ty = task().with_args(vec![sys("Int32")]);
        assert_eq!(caps().awaitable(&ty).and_then(|a| a.result_type), Some(sys("Int32")));
    }

    #[test]
    fn test_value_task_is_awaitable() {
        let ty = TypeRef::named("System.Threading.Tasks", "ValueTask").with_args(vec![sys("String")]);
        assert!(caps().awaitable(&ty).is_some());
    }

    #[test]
    fn test_custom_awaitable() {
        let ty = TypeRef::named("Shop", "Deferred").awaiting(sys("Void"));
        assert_eq!(caps().awaitable(&ty), Some(AwaitableInfo { result_type: None }));
    }

    #[test]
    fn test_plain_value_is_not_awaitable() {
        assert_eq!(caps().awaitable(&sys("Int32")), None);
        assert_eq!(caps().awaitable(&TypeRef::array_of(sys("Int32"), 1)), None);
    }

    #[test]
    fn test_task_role_follows_override() {
        let table = WellKnownTypes::default().with_override(WellKnownRole::Task, "Acme.Future");
        let caps = ClrTypeSystem::new(table);
        assert!(caps.awaitable(&TypeRef::named("Acme", "Future")).is_some());
        assert!(caps.awaitable(&task()).is_none());
    }

    // ========================================
    // Nullable tests
    // ========================================

    #[test]
    fn test_nullable_unwraps_instantiated_only() {
        let nullable_int = sys("Nullable").with_args(vec![sys("Int32")]);
        assert_eq!(caps().nullable_inner(&nullable_int), Some(&sys("Int32")));
        assert_eq!(caps().nullable_inner(&sys("Nullable")), None);
        assert_eq!(caps().nullable_inner(&sys("Int32")), None);
    }

    #[test]
    fn test_nullable_requires_value_type_argument() {
        let point = TypeRef::named("Shop", "Point").value_type();
        let nullable_point = sys("Nullable").with_args(vec![point.clone()]);
        assert_eq!(caps().nullable_inner(&nullable_point), Some(&point));

        let nullable_order = sys("Nullable").with_args(vec![TypeRef::named("Shop", "Order")]);
        assert_eq!(caps().nullable_inner(&nullable_order), None);
        let nullable_text = sys("Nullable").with_args(vec![sys("String")]);
        assert_eq!(caps().nullable_inner(&nullable_text), None);
    }

    // ========================================
    // Parse capability tests
    // ========================================

    #[test]
    fn test_builtins_parse() {
        assert!(caps().has_try_parse(&sys("Int32")));
        assert!(caps().has_try_parse(&sys("Guid")));
        assert!(!caps().has_try_parse(&sys("String")));
        assert!(!caps().has_try_parse(&sys("Object")));
    }

    #[test]
    fn test_user_types_parse_only_when_declared() {
        assert!(!caps().has_try_parse(&TypeRef::named("Shop", "Sku")));
        assert!(caps().has_try_parse(&TypeRef::named("Shop", "Sku").parsable()));
    }

    // ========================================
    // Executable result tests
    // ========================================

    #[test]
    fn test_executable_result_by_identity_or_interface() {
        let iresult = TypeRef::from_full_name("Microsoft.AspNetCore.Http.IResult");
        let redirect = TypeRef::named("Shop", "Redirect").implementing("Microsoft.AspNetCore.Http.IResult");
        assert!(caps().is_executable_result(&iresult));
        assert!(caps().is_executable_result(&redirect));
        assert!(!caps().is_executable_result(&TypeRef::named("Shop", "Order")));
    }

    #[test]
    fn test_roles() {
        let ctx = TypeRef::from_full_name("Microsoft.AspNetCore.Http.HttpContext");
        assert!(caps().is_role(&ctx, WellKnownRole::HttpContext));
        assert!(!caps().is_role(&ctx, WellKnownRole::FormCollection));
        assert!(caps().is_void(&sys("Void")));
        assert!(caps().is_string(&sys("String")));
    }
}
