use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stagehub::{Hub, InterfaceClass, InterfaceHub, Pipeline, PrecedingView, Sequencer, SequencerConfig};

// --- Common Benchmark Interface ---
#[derive(Clone, Debug, Default)]
struct BenchInterface {
  inputs: Vec<f64>,
}

fn filled_pipeline(num_interfaces: usize) -> Pipeline<BenchInterface> {
  let mut pipeline = Pipeline::new("BenchInterface");
  for i in 0..num_interfaces {
    pipeline
      .add_interface(&format!("Step{}", i), BenchInterface { inputs: vec![0.0; 16] })
      .unwrap();
  }
  pipeline
}

// --- Benchmark Functions ---

fn bench_pipeline_complete_and_reset(c: &mut Criterion) {
  let mut group = c.benchmark_group("PipelineCompleteReset");

  for num_interfaces in [5, 20, 100].iter() {
    group.throughput(Throughput::Elements(*num_interfaces as u64));
    group.bench_with_input(
      BenchmarkId::new("complete_all_then_reset", num_interfaces),
      num_interfaces,
      |b, &n| {
        let mut pipeline = filled_pipeline(n);
        b.iter(|| {
          while pipeline.complete_next().is_ok() {}
          pipeline.reset();
          black_box(pipeline.next_scheduled().is_some())
        });
      },
    );
  }
  group.finish();
}

fn bench_rollback_to_first(c: &mut Criterion) {
  let mut group = c.benchmark_group("PipelineRollback");

  for num_interfaces in [5, 20, 100].iter() {
    group.bench_with_input(
      BenchmarkId::new("rollback_to_first", num_interfaces),
      num_interfaces,
      |b, &n| {
        b.iter_batched(
          || {
            let mut pipeline = filled_pipeline(n);
            while pipeline.complete_next().is_ok() {}
            pipeline
          },
          |mut pipeline| {
            pipeline.rollback("Step0").unwrap();
            pipeline
          },
          criterion::BatchSize::SmallInput,
        );
      },
    );
  }
  group.finish();
}

fn bench_views(c: &mut Criterion) {
  let mut group = c.benchmark_group("HubViews");
  let mut pipeline = filled_pipeline(50);
  for _ in 0..25 {
    pipeline.complete_next().unwrap();
  }

  group.bench_function("interface_map", |b| b.iter(|| black_box(pipeline.interface_map())));
  group.bench_function("preceding_full", |b| {
    b.iter(|| black_box(pipeline.preceding_interfaces("Step10", PrecedingView::Full)))
  });
  group.bench_function("sequenced_cls_names", |b| b.iter(|| black_box(pipeline.sequenced_cls_names())));
  group.finish();
}

fn bench_sequencer_sequence(c: &mut Criterion) {
  let mut group = c.benchmark_group("Sequencer");
  let mut sequencer = Sequencer::new(["BenchInterface"], SequencerConfig::default());
  for i in 0..20 {
    sequencer
      .register_interface(
        "BenchInterface",
        InterfaceClass::new(format!("Step{}", i), format!("Step {}", i), || Ok(BenchInterface::default()))
          .with_weight(i as f64),
      )
      .unwrap();
  }

  group.bench_function("sequence_all_20", |b| {
    b.iter(|| {
      let mut hub: Hub<BenchInterface> = sequencer.create_new_hub("BenchInterface", false).unwrap();
      for i in 0..20 {
        sequencer.sequence(&mut hub, &format!("Step {}", i)).unwrap();
      }
      black_box(hub.len())
    })
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_pipeline_complete_and_reset,
  bench_rollback_to_first,
  bench_views,
  bench_sequencer_sequence
);
criterion_main!(benches);
