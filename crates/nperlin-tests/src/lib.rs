//! Integration tests for nperlin crates.
//!
//! End-to-end checks across the noise core, the animation renderer and the
//! output formats.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nperlin_core::{Error, Point};
    use nperlin_io::{frame_path, png, quantize, text};
    use nperlin_noise::{noise, Perlin};
    use nperlin_render::{render_animation, render_frames, AnimationConfig, LoopSampler};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    fn tiny_animation() -> AnimationConfig {
        AnimationConfig {
            size: 16,
            frames: 6,
            ..Default::default()
        }
    }

    /// Same seed, same field, whatever order the lattice is explored in.
    #[test]
    fn test_field_independent_of_query_order() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let points: Vec<[f64; 3]> = (0..200)
            .map(|_| std::array::from_fn(|_| rng.random_range(-20.0..20.0)))
            .collect();

        let mut forward: Perlin<3, f64, i64> = Perlin::new(77);
        let a: Vec<f64> = points.iter().map(|&p| forward.noise(p)).collect();

        let mut backward: Perlin<3, f64, i64> = Perlin::new(77);
        let mut b: Vec<f64> = points.iter().rev().map(|&p| backward.noise(p)).collect();
        b.reverse();

        assert_eq!(a, b);
    }

    /// f32 and f64 generators agree up to rounding.
    #[test]
    fn test_precision_variants_agree() {
        let mut single: Perlin<2, f32, i32> = Perlin::new(5);
        let mut double: Perlin<2, f64, i32> = Perlin::new(5);
        for i in 0..50 {
            let x = i as f32 * 0.173 - 4.0;
            let y = i as f32 * 0.311 + 1.0;
            let s = single.noise((x, y));
            let d = double.noise((x as f64, y as f64));
            assert_abs_diff_eq!(s as f64, d, epsilon = 1e-4);
        }
    }

    /// Shared generator behind a mutex, as required for cross-thread sharing.
    #[test]
    fn test_mutex_shared_generator_matches_private() {
        let shared = Arc::new(Mutex::new(Perlin::<2>::new(3)));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            let p = (t as f32 + i as f32 * 0.07, i as f32 * 0.13);
                            (p, shared.lock().unwrap().noise(p))
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut private: Perlin<2> = Perlin::new(3);
        for handle in handles {
            for (p, value) in handle.join().unwrap() {
                assert_eq!(private.noise(p), value);
            }
        }
    }

    #[test]
    fn test_all_calling_conventions_for_six_dimensions() {
        let coords = [0.1f32, -0.2, 0.3, -0.4, 0.5, -0.6];
        let mut perlin: Perlin<6> = Perlin::default();
        let expected = perlin.noise(coords);

        assert_eq!(perlin.noise((0.1, -0.2, 0.3, -0.4, 0.5, -0.6)), expected);
        assert_eq!(noise!(perlin, 0.1, -0.2, 0.3, -0.4, 0.5, -0.6), expected);
        assert_eq!(perlin.noise(Point::new(coords)), expected);
        assert_eq!(perlin.noise_slice(&coords).unwrap(), expected);
        assert_eq!(perlin.noise_iter(coords.to_vec()).unwrap(), expected);
        assert_eq!(
            perlin.noise_slice(&coords[..5]).unwrap_err(),
            Error::arity_mismatch(6, 5)
        );
    }

    /// Render to PNG files and check every pixel against a direct evaluation.
    #[test]
    fn test_render_png_sequence() {
        let dir = tempdir().unwrap();
        let config = tiny_animation();

        let rendered = render_animation(&config, |index, frame| {
            png::write_gray(frame_path(dir.path(), index), frame)
        })
        .unwrap();
        assert_eq!(rendered, config.frames);

        let sampler = LoopSampler::from_config(&config);
        let mut perlin: Perlin<6> = Perlin::new(config.seed);
        for index in 0..config.frames {
            let image = png::read_gray(frame_path(dir.path(), index)).unwrap();
            assert_eq!((image.width, image.height), (config.size, config.size));

            let progress = config.progress(index);
            for y in 0..config.size {
                for x in 0..config.size {
                    let expected = quantize(perlin.noise(sampler.coords(x, y, progress)));
                    let actual = image.pixels[(y * config.size + x) as usize];
                    assert_eq!(actual, expected, "frame {index} pixel ({x}, {y})");
                }
            }
        }
    }

    /// Animation tiles in space and loops in time.
    #[test]
    fn test_animation_is_seamless() {
        let config = AnimationConfig {
            size: 32,
            frames: 8,
            ..Default::default()
        };
        let frames = render_frames(&config).unwrap();

        // Neighbouring pixels across the wrap seam differ about as much as
        // neighbours inside the image.
        let frame = &frames[0];
        let last = config.size - 1;
        let max_step = (0..config.size)
            .flat_map(|y| (0..last).map(move |x| (x, y)))
            .map(|(x, y)| (frame.get(x + 1, y) - frame.get(x, y)).abs())
            .fold(0.0f32, f32::max);
        for y in 0..config.size {
            let seam = (frame.get(0, y) - frame.get(last, y)).abs();
            assert!(seam <= max_step * 1.5 + 1e-6, "seam step {seam} vs {max_step}");
        }

        // One step past the last frame is the first frame again.
        let sampler = LoopSampler::from_config(&config);
        let mut perlin: Perlin<6> = Perlin::new(config.seed);
        let after_last = perlin.noise(sampler.coords(3, 5, 1.0));
        assert_abs_diff_eq!(after_last, frames[0].get(3, 5), epsilon = 1e-5);
    }

    #[test]
    fn test_json_dump_roundtrip() {
        let config = AnimationConfig {
            size: 8,
            frames: 3,
            ..AnimationConfig::text_dump()
        };
        let frames = render_frames(&config).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("frames.json");
        text::write_frames_json(std::fs::File::create(&path).unwrap(), &frames).unwrap();

        let loaded = text::read_frames_json(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(loaded, frames);
    }

    #[test]
    fn test_render_with_dedicated_pool() {
        let config = tiny_animation();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build().unwrap();
        let pooled = pool.install(|| render_frames(&config).unwrap());
        assert_eq!(pooled, render_frames(&config).unwrap());
    }
}
