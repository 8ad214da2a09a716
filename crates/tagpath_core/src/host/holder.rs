//! Holders that own one root tagged container.
//!
//! Entities, items and similar host objects expose their root container
//! through this trait and get every path operation as a provided method.

use crate::error::TagPathResult;
use crate::host::{HostErrorOf, KeyOf, TaggedContainer};
use crate::model::value::{Number, TagType, TagValue};
use crate::numeric::accumulator;
use crate::path::leaf;

/// Host object owning a root tagged container.
pub trait ContainerHolder {
    type Container: TaggedContainer;

    fn container(&self) -> &Self::Container;
    fn container_mut(&mut self) -> &mut Self::Container;

    /// See [`leaf::modify_nested`].
    fn modify_nested<F, R>(
        &mut self,
        path: &[KeyOf<Self::Container>],
        mutation: F,
    ) -> TagPathResult<R, HostErrorOf<Self::Container>>
    where
        F: FnOnce(&mut Self::Container) -> Result<R, HostErrorOf<Self::Container>>,
    {
        leaf::modify_nested(self.container_mut(), path, mutation)
    }

    /// See [`leaf::get`].
    fn get_nested(
        &self,
        tag: TagType,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<Option<TagValue<Self::Container>>, HostErrorOf<Self::Container>> {
        leaf::get(self.container(), tag, path)
    }

    /// See [`leaf::get_or_default`].
    fn get_nested_or_default(
        &self,
        tag: TagType,
        default: TagValue<Self::Container>,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<TagValue<Self::Container>, HostErrorOf<Self::Container>> {
        leaf::get_or_default(self.container(), tag, default, path)
    }

    /// See [`leaf::set`].
    fn set_nested(
        &mut self,
        value: TagValue<Self::Container>,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<(), HostErrorOf<Self::Container>> {
        leaf::set(self.container_mut(), value, path)
    }

    /// See [`leaf::delete`].
    fn delete_nested(
        &mut self,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<(), HostErrorOf<Self::Container>> {
        leaf::delete(self.container_mut(), path)
    }

    /// See [`accumulator::add`].
    fn add_number<N>(
        &mut self,
        value: N,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<Number, HostErrorOf<Self::Container>>
    where
        N: Into<TagValue<Self::Container>>,
    {
        accumulator::add(self.container_mut(), value, path)
    }

    /// See [`accumulator::add_clamped`].
    fn add_number_clamped<N>(
        &mut self,
        value: N,
        min: Option<N>,
        max: Option<N>,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<Number, HostErrorOf<Self::Container>>
    where
        N: Into<TagValue<Self::Container>>,
    {
        accumulator::add_clamped(self.container_mut(), value, min, max, path)
    }

    /// See [`accumulator::remove_capped`].
    fn remove_number_capped<N>(
        &mut self,
        value: N,
        min: Option<N>,
        max: Option<N>,
        path: &[KeyOf<Self::Container>],
    ) -> TagPathResult<Number, HostErrorOf<Self::Container>>
    where
        N: Into<TagValue<Self::Container>>,
    {
        accumulator::remove_capped(self.container_mut(), value, min, max, path)
    }
}
