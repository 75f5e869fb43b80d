//! Broad-phase driver for the swept box tests
//!
//! Runs one swept test against a list of candidates: geometry whose
//! collision type doesn't match is filtered, candidates outside the swept
//! bounds are culled, and only the survivors are handed to the exact
//! intersection routine supplied by the caller.
//!
//! Everything here is statically dispatched. Call sites that handle both box
//! shapes use the [`BoxCollisionTest`] enum.

use std::cell::Cell;
use std::fmt;
use std::ops::AddAssign;

use crate::core::config::CollisionConfig;
use crate::foundation::math::Vec3;
use crate::physics::collision::{
    AABox, AABoxCollisionTest, CastResult, CollisionType, OBBox, OBBoxCollisionTest,
};
use crate::render::{Drawable, DrawableStore, RenderObjId};

/// Common surface of the swept tests used by the broad phase
pub trait SweptVolume {
    /// Geometry categories the test participates in
    fn collision_type(&self) -> CollisionType;

    /// Minimum corner of the swept volume
    fn sweep_min(&self) -> &Vec3;

    /// Maximum corner of the swept volume
    fn sweep_max(&self) -> &Vec3;

    /// True when `candidate` can't touch the swept volume
    fn cull(&self, candidate: &AABox) -> bool;

    /// Record an impact; see [`CollisionTest::record_hit`](crate::physics::collision::CollisionTest::record_hit)
    fn record_hit(&mut self, obj: RenderObjId, fraction: f32, normal: Vec3) -> bool;

    /// Record that the volume starts inside `obj`
    fn record_start_inside(&mut self, obj: RenderObjId);

    /// Render object struck so far
    fn collided_render_obj(&self) -> Option<RenderObjId>;
}

impl SweptVolume for AABoxCollisionTest<'_> {
    fn collision_type(&self) -> CollisionType {
        self.context().collision_type()
    }

    fn sweep_min(&self) -> &Vec3 {
        AABoxCollisionTest::sweep_min(self)
    }

    fn sweep_max(&self) -> &Vec3 {
        AABoxCollisionTest::sweep_max(self)
    }

    #[inline]
    fn cull(&self, candidate: &AABox) -> bool {
        AABoxCollisionTest::cull(self, candidate)
    }

    fn record_hit(&mut self, obj: RenderObjId, fraction: f32, normal: Vec3) -> bool {
        AABoxCollisionTest::record_hit(self, obj, fraction, normal)
    }

    fn record_start_inside(&mut self, obj: RenderObjId) {
        self.context_mut().record_start_inside(obj);
    }

    fn collided_render_obj(&self) -> Option<RenderObjId> {
        self.context().collided_render_obj()
    }
}

impl SweptVolume for OBBoxCollisionTest<'_> {
    fn collision_type(&self) -> CollisionType {
        self.context().collision_type()
    }

    fn sweep_min(&self) -> &Vec3 {
        OBBoxCollisionTest::sweep_min(self)
    }

    fn sweep_max(&self) -> &Vec3 {
        OBBoxCollisionTest::sweep_max(self)
    }

    #[inline]
    fn cull(&self, candidate: &AABox) -> bool {
        OBBoxCollisionTest::cull(self, candidate)
    }

    fn record_hit(&mut self, obj: RenderObjId, fraction: f32, normal: Vec3) -> bool {
        OBBoxCollisionTest::record_hit(self, obj, fraction, normal)
    }

    fn record_start_inside(&mut self, obj: RenderObjId) {
        self.context_mut().record_start_inside(obj);
    }

    fn collided_render_obj(&self) -> Option<RenderObjId> {
        self.context().collided_render_obj()
    }
}

/// Either kind of swept box test
#[derive(Debug, Clone)]
pub enum BoxCollisionTest<'a> {
    /// Axis-aligned box
    Aligned(AABoxCollisionTest<'a>),
    /// Oriented box
    Oriented(OBBoxCollisionTest<'a>),
}

impl SweptVolume for BoxCollisionTest<'_> {
    fn collision_type(&self) -> CollisionType {
        match self {
            Self::Aligned(test) => SweptVolume::collision_type(test),
            Self::Oriented(test) => SweptVolume::collision_type(test),
        }
    }

    fn sweep_min(&self) -> &Vec3 {
        match self {
            Self::Aligned(test) => test.sweep_min(),
            Self::Oriented(test) => test.sweep_min(),
        }
    }

    fn sweep_max(&self) -> &Vec3 {
        match self {
            Self::Aligned(test) => test.sweep_max(),
            Self::Oriented(test) => test.sweep_max(),
        }
    }

    #[inline]
    fn cull(&self, candidate: &AABox) -> bool {
        match self {
            Self::Aligned(test) => test.cull(candidate),
            Self::Oriented(test) => test.cull(candidate),
        }
    }

    fn record_hit(&mut self, obj: RenderObjId, fraction: f32, normal: Vec3) -> bool {
        match self {
            Self::Aligned(test) => test.record_hit(obj, fraction, normal),
            Self::Oriented(test) => test.record_hit(obj, fraction, normal),
        }
    }

    fn record_start_inside(&mut self, obj: RenderObjId) {
        match self {
            Self::Aligned(test) => SweptVolume::record_start_inside(test, obj),
            Self::Oriented(test) => SweptVolume::record_start_inside(test, obj),
        }
    }

    fn collided_render_obj(&self) -> Option<RenderObjId> {
        match self {
            Self::Aligned(test) => SweptVolume::collided_render_obj(test),
            Self::Oriented(test) => SweptVolume::collided_render_obj(test),
        }
    }
}

impl<'a> From<AABoxCollisionTest<'a>> for BoxCollisionTest<'a> {
    fn from(test: AABoxCollisionTest<'a>) -> Self {
        Self::Aligned(test)
    }
}

impl<'a> From<OBBoxCollisionTest<'a>> for BoxCollisionTest<'a> {
    fn from(test: OBBoxCollisionTest<'a>) -> Self {
        Self::Oriented(test)
    }
}

/// A piece of scene geometry offered to a swept test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Render object owning the geometry
    pub render_obj: RenderObjId,
    /// World-space bounds of the geometry
    pub bounds: AABox,
    /// Collision categories the geometry responds to
    pub collision_type: CollisionType,
}

impl Candidate {
    /// Candidate for a drawable
    pub fn from_drawable(render_obj: RenderObjId, drawable: &Drawable) -> Self {
        Self {
            render_obj,
            bounds: drawable.bounds(),
            collision_type: drawable.collision_type,
        }
    }
}

/// Collect a candidate for every drawable in `store`
pub fn gather_candidates(store: &DrawableStore) -> Vec<Candidate> {
    store
        .iter()
        .map(|(id, drawable)| Candidate::from_drawable(id, drawable))
        .collect()
}

/// Candidates that match the test's collision type and survive its cull
pub fn survivors<'c, T: SweptVolume>(
    test: &'c T,
    candidates: &'c [Candidate],
) -> impl Iterator<Item = &'c Candidate> + 'c {
    candidates.iter().filter(move |candidate| {
        candidate.collision_type.matches(test.collision_type()) && !test.cull(&candidate.bounds)
    })
}

/// Counters for one or more broad-phase passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Candidates looked at
    pub tested: usize,
    /// Rejected by collision type
    pub filtered: usize,
    /// Rejected by the swept bounds
    pub culled: usize,
    /// Passed on to the exact intersection routine
    pub exact: usize,
}

impl AddAssign for CullStats {
    fn add_assign(&mut self, other: Self) {
        self.tested += other.tested;
        self.filtered += other.filtered;
        self.culled += other.culled;
        self.exact += other.exact;
    }
}

impl fmt::Display for CullStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tested, {} filtered, {} culled, {} exact",
            self.tested, self.filtered, self.culled, self.exact
        )
    }
}

/// Run `test` against `candidates`, calling `exact` for every survivor
pub fn sweep<T, F>(test: &mut T, candidates: &[Candidate], mut exact: F) -> CullStats
where
    T: SweptVolume,
    F: FnMut(&mut T, &Candidate),
{
    let mut stats = CullStats::default();
    for candidate in candidates {
        stats.tested += 1;
        if !candidate.collision_type.matches(test.collision_type()) {
            stats.filtered += 1;
        } else if test.cull(&candidate.bounds) {
            stats.culled += 1;
        } else {
            stats.exact += 1;
            exact(test, candidate);
        }
    }
    stats
}

/// Broad phase for a simulation: builds tests with the configured defaults
/// and keeps running totals across passes
#[derive(Debug, Clone, Default)]
pub struct BroadPhase {
    config: CollisionConfig,
    totals: CullStats,
}

impl BroadPhase {
    /// Create a broad phase with the given configuration
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            config,
            totals: CullStats::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Axis-aligned test with the configured default collision type
    pub fn aabox_test<'a>(
        &self,
        aabox: AABox,
        motion: Vec3,
        result: Option<&'a Cell<CastResult>>,
    ) -> AABoxCollisionTest<'a> {
        AABoxCollisionTest::with_type(aabox, motion, result, self.config.default_collision_type)
    }

    /// Oriented test with the configured default collision type
    pub fn obbox_test<'a>(
        &self,
        obbox: OBBox,
        motion: Vec3,
        result: Option<&'a Cell<CastResult>>,
    ) -> OBBoxCollisionTest<'a> {
        OBBoxCollisionTest::with_type(obbox, motion, result, self.config.default_collision_type)
    }

    /// [`sweep`] that also adds to the running totals
    pub fn sweep<T, F>(&mut self, test: &mut T, candidates: &[Candidate], exact: F) -> CullStats
    where
        T: SweptVolume,
        F: FnMut(&mut T, &Candidate),
    {
        let stats = sweep(test, candidates, exact);
        self.totals += stats;
        if self.config.log_cull_statistics {
            log::debug!("Broad phase pass: {stats}");
        } else {
            log::trace!("Broad phase pass: {stats}");
        }
        stats
    }

    /// Totals since creation or the last [`reset_totals`](Self::reset_totals)
    pub fn totals(&self) -> CullStats {
        self.totals
    }

    /// Clear the running totals, e.g. at the start of a tick
    pub fn reset_totals(&mut self) {
        self.totals = CullStats::default();
    }
}
