use bevy::prelude::*;

/// Distance along the ray to an oriented box given by its transform and full extents.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_direction[axis];
        if d == 0.0 {
            // Parallel to this slab: must already lie inside it.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((min[axis] - o) * inv, (max[axis] - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

/// Closest candidate hit by the ray, with its distance.
pub fn nearest_hit<T, I>(origin: Vec3, dir: Vec3, candidates: I) -> Option<(T, f32)>
where
    I: IntoIterator<Item = (T, GlobalTransform, Vec3)>,
{
    candidates
        .into_iter()
        .filter_map(|(item, xf, size)| {
            ray_hits_obb(origin, dir, &xf, size).map(|t| (item, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(at: Vec3) -> GlobalTransform {
        GlobalTransform::from(Transform::from_translation(at))
    }

    #[test]
    fn hits_box_in_front() {
        let t = ray_hits_obb(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, &boxed(Vec3::ZERO), Vec3::ONE);
        assert!((t.unwrap() - 9.5).abs() < 1e-5);
    }

    #[test]
    fn misses_box_behind() {
        let t = ray_hits_obb(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, &boxed(Vec3::ZERO), Vec3::ONE);
        assert!(t.is_none());
    }

    #[test]
    fn misses_box_beside_axis_parallel_ray() {
        let t = ray_hits_obb(Vec3::new(2.0, 0.0, 10.0), Vec3::NEG_Z, &boxed(Vec3::ZERO), Vec3::ONE);
        assert!(t.is_none());
    }

    #[test]
    fn origin_inside_reports_exit() {
        let t = ray_aabb_hit_t(Vec3::ZERO, Vec3::X, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn rotated_box_uses_local_frame() {
        // A long thin box rotated 90 degrees about Z lies along Y.
        let xf = GlobalTransform::from(
            Transform::from_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
        );
        let size = Vec3::new(4.0, 0.2, 0.2);
        let along_y = ray_hits_obb(Vec3::new(0.0, 1.5, 5.0), Vec3::NEG_Z, &xf, size);
        let along_x = ray_hits_obb(Vec3::new(1.5, 0.0, 5.0), Vec3::NEG_Z, &xf, size);
        assert!(along_y.is_some());
        assert!(along_x.is_none());
    }

    #[test]
    fn nearest_hit_prefers_closest() {
        let candidates = vec![
            ("far", boxed(Vec3::new(0.0, 0.0, -5.0)), Vec3::ONE),
            ("near", boxed(Vec3::new(0.0, 0.0, 2.0)), Vec3::ONE),
            ("off_axis", boxed(Vec3::new(3.0, 0.0, 4.0)), Vec3::ONE),
        ];
        let hit = nearest_hit(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, candidates);
        assert_eq!(hit.map(|(name, _)| name), Some("near"));
    }

    #[test]
    fn nearest_hit_empty_is_none() {
        let hit = nearest_hit::<u8, _>(Vec3::ZERO, Vec3::X, Vec::new());
        assert!(hit.is_none());
    }
}
