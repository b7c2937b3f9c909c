mod remainder;

use criterion::criterion_group;

criterion_group!(benches, remainder::basic);
