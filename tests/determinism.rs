mod util;

use mesh_cursor_bench::driver::{BenchConfig, run};
use mesh_cursor_bench::mesh::{DEFAULT_SEED, Mesh, RandomMode};
use mesh_cursor_bench::strategy::Strategy;

fn tables(mesh: &Mesh) -> Vec<u8> {
    let mut out = Vec::new();
    mesh.write_coordinate_table(&mut out).unwrap();
    mesh.write_connectivity_table(&mut out).unwrap();
    out
}

#[test]
fn reproducible_tables_are_byte_identical() {
    let a = Mesh::try_generate(200, 300, RandomMode::Reproducible { seed: DEFAULT_SEED }).unwrap();
    let b = Mesh::try_generate(200, 300, RandomMode::Reproducible { seed: DEFAULT_SEED }).unwrap();
    assert_eq!(tables(&a), tables(&b));
    assert_eq!(
        bytemuck::cast_slice::<f64, u8>(a.coordinate_buffer()),
        bytemuck::cast_slice::<f64, u8>(b.coordinate_buffer())
    );
}

#[test]
fn repeated_runs_report_identical_totals() {
    let config = BenchConfig {
        vertex_count: 100,
        cell_count: 400,
        print_tables: true,
        random_mode: RandomMode::Reproducible { seed: 1234 },
        ..Default::default()
    };
    let first = run(&config, &mut Vec::new()).unwrap();
    let second = run(&config, &mut Vec::new()).unwrap();
    for strategy in Strategy::ALL {
        assert_eq!(
            first.find(strategy).unwrap().total.to_bits(),
            second.find(strategy).unwrap().total.to_bits(),
            "{strategy}"
        );
    }
}

#[test]
fn entropy_mode_still_valid() {
    use mesh_cursor_bench::DebugInvariants;
    let mesh = Mesh::try_generate(16, 64, RandomMode::Entropy).unwrap();
    mesh.validate_invariants().unwrap();
    let totals: Vec<f64> = Strategy::ALL.iter().map(|s| s.total_volume(&mesh)).collect();
    assert!(totals.windows(2).all(|w| w[0] == w[1]));
}
