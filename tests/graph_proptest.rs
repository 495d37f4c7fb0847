use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use unitgraph::{Graph, Unit, Units, Vertex};

#[derive(Debug, Clone)]
enum Op {
    Vertex(Vec<Unit>),
    Edge(usize, usize, u32, Vec<Unit>),
    Pair(usize, usize, u32, Vec<Unit>),
}

fn unit_list() -> impl Strategy<Value = Vec<Unit>> {
    proptest::collection::vec(0u32..8, 0..4)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        unit_list().prop_map(Op::Vertex),
        (any::<usize>(), any::<usize>(), 0u32..100, unit_list())
            .prop_map(|(a, b, c, u)| Op::Edge(a, b, c, u)),
        (any::<usize>(), any::<usize>(), 0u32..100, unit_list())
            .prop_map(|(a, b, c, u)| Op::Pair(a, b, c, u)),
    ]
}

fn to_units(list: &[Unit]) -> Units {
    list.iter().copied().collect()
}

proptest! {
    #[test]
    fn graph_matches_model(ops in proptest::collection::vec(op(), 1..120)) {
        Graph::scope(|mut g| {
            // Model: per vertex, (units, outgoing (target, cost, units)).
            let mut model: Vec<(Units, Vec<(usize, u32, Units)>)> = Vec::new();
            let mut oracle: DiGraph<(), u32> = DiGraph::new();
            let mut addresses: Vec<*const Vertex<'_>> = Vec::new();

            for op in &ops {
                match op {
                    Op::Vertex(units) => {
                        let v = g.add_vertex(format!("n{}", model.len()), to_units(units));
                        assert_eq!(v.index(), model.len());
                        model.push((to_units(units), Vec::new()));
                        oracle.add_node(());
                        addresses.push(v.into_ref());
                    }
                    Op::Edge(a, b, cost, units) | Op::Pair(a, b, cost, units) => {
                        if model.is_empty() {
                            assert!(g.vertex_at(*a).is_err());
                            continue;
                        }
                        let a = g.vertex_at(a % model.len()).unwrap();
                        let b = g.vertex_at(b % model.len()).unwrap();
                        if matches!(op, Op::Pair(..)) {
                            g.add_edge_pair(a, b, *cost, to_units(units));
                            model[b.index()].1.push((a.index(), *cost, to_units(units)));
                            oracle.add_edge(
                                NodeIndex::new(b.index()),
                                NodeIndex::new(a.index()),
                                *cost,
                            );
                        } else {
                            g.add_edge(a, b, *cost, to_units(units));
                        }
                        model[a.index()].1.push((b.index(), *cost, to_units(units)));
                        oracle.add_edge(
                            NodeIndex::new(a.index()),
                            NodeIndex::new(b.index()),
                            *cost,
                        );
                    }
                }
            }

            assert_eq!(g.num_vertexes(), model.len());
            assert_eq!(g.num_edges(), oracle.edge_count());

            for (idx, vertex) in g.vertexes().enumerate() {
                assert_eq!(vertex.index(), idx);
                assert!(std::ptr::eq(addresses[idx], vertex));
                assert_eq!(vertex.units(), &model[idx].0);
                let edges: Vec<_> = vertex
                    .edges()
                    .iter()
                    .map(|e| {
                        assert_eq!(e.source().index(), idx);
                        (e.target().index(), e.cost(), e.units().clone())
                    })
                    .collect();
                assert_eq!(edges, model[idx].1);
            }

            let mut ours: Vec<_> = g
                .edges()
                .map(|e| (e.source().index(), e.target().index(), e.cost()))
                .collect();
            let mut theirs: Vec<_> = oracle
                .raw_edges()
                .iter()
                .map(|e| (e.source().index(), e.target().index(), e.weight))
                .collect();
            ours.sort_unstable();
            theirs.sort_unstable();
            assert_eq!(ours, theirs);
        });
    }

    #[test]
    fn edge_ids_resolve_to_their_edges(costs in proptest::collection::vec(0u32..50, 1..60)) {
        Graph::scope(|mut g| {
            let hub = g.add_vertex("hub", Units::new()).id();
            let spoke = g.add_vertex("spoke", Units::new()).id();
            let ids: Vec<_> = costs
                .iter()
                .map(|c| g.add_edge(hub, spoke, *c, Units::new()))
                .collect();
            for (slot, (id, cost)) in ids.iter().zip(&costs).enumerate() {
                assert_eq!(id.slot(), slot);
                assert_eq!(g.edge_at(hub, slot).unwrap(), *id);
                assert_eq!(g.edge(*id).cost(), *cost);
            }
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        });
    }
}
