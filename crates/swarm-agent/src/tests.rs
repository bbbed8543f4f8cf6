//! Unit tests for swarm-agent.

#[cfg(test)]
mod builder {
    use swarm_core::{AgentId, Arena, SwarmConfig};

    use crate::SwarmBuilder;

    const SELECTION: [&str; 4] = ["CEO", "TOKEN_DEPLOYER", "TRADER", "LENDER"];

    #[test]
    fn one_agent_per_selected_kind() {
        let (swarm, rngs) = SwarmBuilder::new(Arena::default(), 42)
            .selection(SELECTION)
            .build();
        assert_eq!(swarm.len(), 4);
        assert_eq!(rngs.len(), 4);
        for (i, agent) in swarm.agents().iter().enumerate() {
            assert_eq!(agent.id, AgentId(i as u32));
            assert_eq!(agent.kind.as_str(), SELECTION[i]);
        }
    }

    #[test]
    fn labels_combine_kind_and_index() {
        let (swarm, _) = SwarmBuilder::new(Arena::default(), 0)
            .selection(["TRADER", "TRADER"])
            .build();
        let labels: Vec<String> = swarm.agents().iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["TRADER-0", "TRADER-1"]);
    }

    #[test]
    fn empty_selection_builds_empty_swarm() {
        let (swarm, rngs) = SwarmBuilder::new(Arena::default(), 42).build();
        assert!(swarm.is_empty());
        assert!(rngs.is_empty());
        assert_eq!(swarm.mean_energy(), 0.0);
        assert!(swarm.collaboration_edges().is_empty());
    }

    #[test]
    fn initial_state_is_in_range() {
        let arena = Arena::new(300.0, 200.0).unwrap();
        let kinds: Vec<String> = (0..50).map(|i| format!("KIND_{i}")).collect();
        let (swarm, _) = SwarmBuilder::new(arena, 9).selection(kinds).build();
        for a in swarm.agents() {
            assert!(arena.contains(a.position), "{} at {}", a.label(), a.position);
            assert!((0.0..std::f32::consts::TAU).contains(&a.heading));
            assert!((2.0..3.0).contains(&a.speed));
            assert_eq!(a.energy, 100.0);
            assert!(a.neighbors.is_empty());
        }
    }

    #[test]
    fn same_seed_same_swarm() {
        let build = || {
            SwarmBuilder::new(Arena::default(), 1234)
                .selection(SELECTION)
                .build()
                .0
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn different_seed_different_swarm() {
        let a = SwarmBuilder::new(Arena::default(), 1).selection(SELECTION).build().0;
        let b = SwarmBuilder::new(Arena::default(), 2).selection(SELECTION).build().0;
        assert_ne!(a, b);
    }

    #[test]
    fn appending_a_kind_keeps_existing_agents() {
        let short = SwarmBuilder::new(Arena::default(), 5).selection(["CEO", "TRADER"]).build().0;
        let long = SwarmBuilder::new(Arena::default(), 5)
            .selection(["CEO", "TRADER", "LENDER"])
            .build()
            .0;
        assert_eq!(short.agents(), &long.agents()[..2]);
    }

    #[test]
    fn fixed_speed_when_range_is_degenerate() {
        let (swarm, _) = SwarmBuilder::new(Arena::default(), 3)
            .selection(SELECTION)
            .speed_range(2.5, 2.5)
            .build();
        assert!(swarm.agents().iter().all(|a| a.speed == 2.5));
    }

    #[test]
    fn initial_energy_is_clamped() {
        let (swarm, _) = SwarmBuilder::new(Arena::default(), 3)
            .selection(["CEO"])
            .initial_energy(250.0)
            .build();
        assert_eq!(swarm.agents()[0].energy, 100.0);
    }

    #[test]
    fn spawn_respects_buffer_zone() {
        let arena = Arena::default();
        let kinds: Vec<String> = (0..40).map(|i| i.to_string()).collect();
        let (swarm, _) = SwarmBuilder::new(arena, 11).selection(kinds).buffer_zone(50.0).build();
        for a in swarm.agents() {
            assert!((50.0..550.0).contains(&a.position.x));
            assert!((50.0..350.0).contains(&a.position.y));
        }
    }

    #[test]
    fn from_config_uses_config_values() {
        let cfg = SwarmConfig { seed: 77, speed_min: 1.0, speed_max: 1.0, ..SwarmConfig::default() };
        let (swarm, _) = SwarmBuilder::from_config(&cfg, cfg.arena().unwrap())
            .selection(["CEO"])
            .build();
        assert_eq!(swarm.agents()[0].speed, 1.0);
        let again = SwarmBuilder::new(cfg.arena().unwrap(), 77)
            .selection(["CEO"])
            .speed_range(1.0, 1.0)
            .build()
            .0;
        assert_eq!(swarm, again);
    }
}

#[cfg(test)]
mod swarm {
    use swarm_core::{AgentId, AgentKind, Arena, Tick, Vec2};

    use crate::{Swarm, SwarmAgent};

    fn agent(id: u32, neighbors: &[u32], energy: f32) -> SwarmAgent {
        SwarmAgent {
            id:        AgentId(id),
            kind:      AgentKind::from("TRADER"),
            position:  Vec2::new(10.0 * id as f32, 10.0),
            heading:   0.0,
            speed:     2.0,
            energy,
            neighbors: neighbors.iter().copied().map(AgentId).collect(),
        }
    }

    #[test]
    fn collaboration_edges_are_unique_pairs() {
        let swarm = Swarm::from_agents(
            Tick(3),
            Arena::default(),
            vec![agent(0, &[1, 2], 80.0), agent(1, &[0], 80.0), agent(2, &[0], 80.0)],
        );
        assert_eq!(
            swarm.collaboration_edges(),
            vec![(AgentId(0), AgentId(1)), (AgentId(0), AgentId(2))]
        );
        assert_eq!(swarm.tick(), Tick(3));
    }

    #[test]
    fn mean_energy() {
        let swarm = Swarm::from_agents(
            Tick::ZERO,
            Arena::default(),
            vec![agent(0, &[], 60.0), agent(1, &[], 100.0)],
        );
        assert!((swarm.mean_energy() - 80.0).abs() < 1e-5);
    }

    #[test]
    fn render_hints() {
        let lonely = agent(0, &[], 100.0);
        assert!(!lonely.is_collaborating());
        assert!((lonely.opacity() - 0.9).abs() < 1e-6);
        let busy = agent(1, &[0], 0.0);
        assert!(busy.is_collaborating());
        assert!((busy.opacity() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn lookup_by_id() {
        let swarm = Swarm::from_agents(Tick::ZERO, Arena::default(), vec![agent(0, &[], 1.0)]);
        assert!(swarm.get(AgentId(0)).is_some());
        assert!(swarm.get(AgentId(1)).is_none());
        assert_eq!(swarm.agent_ids().collect::<Vec<_>>(), vec![AgentId(0)]);
    }
}
