use criterion::{Criterion, black_box, criterion_group, criterion_main};
use uvsphere_mesh::*;

const RESOLUTIONS: [(u32, u32); 3] = [(6, 6), (32, 64), (256, 512)];

fn bench_sample_sphere(c: &mut Criterion) {
    for (phi, theta) in RESOLUTIONS {
        let divisions = DivisionCounts::new(phi, theta).unwrap();
        c.bench_function(&format!("sample_sphere_{phi}x{theta}"), |bencher| {
            bencher.iter(|| black_box(sample_sphere(black_box(divisions))))
        });
    }
}

fn bench_triangulate(c: &mut Criterion) {
    for (phi, theta) in RESOLUTIONS {
        let divisions = DivisionCounts::new(phi, theta).unwrap();
        c.bench_function(&format!("triangulate_{phi}x{theta}"), |bencher| {
            bencher.iter(|| black_box(triangulate(black_box(divisions), SeamMode::Closed)))
        });
    }
}

fn bench_generate_mesh(c: &mut Criterion) {
    let divisions = DivisionCounts::new(64, 128).unwrap();
    c.bench_function("sphere_mesh_generate_64x128", |bencher| {
        bencher.iter(|| black_box(SphereMesh::generate(black_box(divisions), SeamMode::Closed)))
    });
}

criterion_group!(
    benches,
    bench_sample_sphere,
    bench_triangulate,
    bench_generate_mesh
);
criterion_main!(benches);
