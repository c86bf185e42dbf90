use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sharehub::model::{BookingDetails, BookingRequest, PaymentMethod, ShareItem};
use sharehub::{FlowContext, Hub, HubError, Store, StepControl, TrackingStatus, Workflow};
use tokio::runtime::Runtime;

#[derive(Clone, Debug, Default)]
struct BenchContext {
  counter: u64,
}

fn step_names(count: usize) -> Vec<(&'static str, bool)> {
  (0..count)
    .map(|i| (Box::leak(format!("step_{i}").into_boxed_str()) as &'static str, false))
    .collect()
}

fn bench_workflow_steps(c: &mut Criterion) {
  let mut group = c.benchmark_group("WorkflowSteps");
  let rt = Runtime::new().unwrap();

  for num_steps in [1usize, 5, 10] {
    let defs = step_names(num_steps);
    let mut flow = Workflow::<BenchContext>::new("bench", &defs);
    for (name, _) in &defs {
      flow
        .on(name, |ctx: FlowContext<BenchContext>| async move {
          ctx.write().counter += 1;
          Ok::<_, HubError>(StepControl::Continue)
        })
        .unwrap();
    }
    let flow = Arc::new(flow);

    group.throughput(Throughput::Elements(num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), &num_steps, |b, _| {
      b.to_async(&rt).iter_batched(
        || FlowContext::new(BenchContext::default()),
        |ctx| {
          let flow = flow.clone();
          async move { flow.run(ctx).await.unwrap() }
        },
        criterion::BatchSize::SmallInput,
      );
    });
  }
  group.finish();
}

fn bench_store_upsert(c: &mut Criterion) {
  let mut group = c.benchmark_group("StoreUpsert");

  for collection_size in [3usize, 100, 1000] {
    let store = Store::in_memory();
    let template = store.find::<ShareItem>("1").unwrap().unwrap();
    for i in 0..collection_size.saturating_sub(3) {
      let mut item = template.clone();
      item.id = format!("filler-{i}");
      store.upsert(&item).unwrap();
    }

    group.bench_with_input(BenchmarkId::from_parameter(collection_size), &collection_size, |b, _| {
      let mut item = template.clone();
      b.iter(|| {
        item.price_per_day += 1;
        store.upsert(&item).unwrap();
      });
    });
  }
  group.finish();
}

fn bench_hub_flows(c: &mut Criterion) {
  let mut group = c.benchmark_group("HubFlows");
  let rt = Runtime::new().unwrap();
  let hub = Hub::in_memory().unwrap();

  group.bench_function("status_update", |b| {
    b.to_async(&rt).iter(|| {
      let hub = hub.clone();
      async move {
        hub
          .update_order_status("ORD-001", TrackingStatus::OutForDelivery)
          .await
          .unwrap()
      }
    });
  });

  group.bench_function("booking", |b| {
    b.to_async(&rt).iter_batched(
      || {
        let hub = Hub::in_memory().unwrap();
        let request = BookingRequest {
          item_id: "3".to_string(),
          buyer_id: "u1".to_string(),
          delivery_address: "KV Narela, Delhi".to_string(),
          details: BookingDetails {
            quantity: 2,
            pickup_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            lending_time: "10:00".to_string(),
          },
          payment_method: PaymentMethod::IciciBank,
        };
        (hub, request)
      },
      |(hub, request)| async move { hub.book(request).await.unwrap() },
      criterion::BatchSize::SmallInput,
    );
  });
  group.finish();
}

criterion_group!(benches, bench_workflow_steps, bench_store_upsert, bench_hub_flows);
criterion_main!(benches);
