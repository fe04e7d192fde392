//! 内置课程结构：6 个模块、17 个章节，顺序即侧边栏展示顺序。

use crate::models::catalog::{Chapter, Module};

pub static BOOK_MODULES: &[Module] = &[
    Module {
        id: "m1",
        title: "Module 1: Introduction to Physical AI",
        chapters: &[
            Chapter { id: "c1", title: "Chapter 1: Introduction to Physical AI" },
            Chapter { id: "c2", title: "Chapter 2: Sensor Systems for Physical AI" },
        ],
    },
    Module {
        id: "m2",
        title: "Module 2: ROS 2 – Robotic Nervous System",
        chapters: &[
            Chapter { id: "c3", title: "Chapter 3: The Robotic Nervous System — ROS 2" },
            Chapter { id: "c4", title: "Chapter 4: Controlling Robots with Python and ROS 2" },
            Chapter { id: "c5", title: "Chapter 5: Describing Robots — URDF & SDF" },
        ],
    },
    Module {
        id: "m3",
        title: "Module 3: Simulation & Digital Twin",
        chapters: &[
            Chapter { id: "c6", title: "Chapter 6: The Digital Twin Concept" },
            Chapter { id: "c7", title: "Chapter 7: Robot Simulation with Gazebo" },
            Chapter { id: "c8", title: "Chapter 8: High-Fidelity Simulation with Unity" },
        ],
    },
    Module {
        id: "m4",
        title: "Module 4: AI Robot Brain",
        chapters: &[
            Chapter { id: "c9", title: "Chapter 9: NVIDIA Isaac Platform Overview" },
            Chapter { id: "c10", title: "Chapter 10: Perception and Mapping with Isaac ROS" },
            Chapter { id: "c11", title: "Chapter 11: Path Planning and Navigation (Nav2)" },
            Chapter { id: "c12", title: "Chapter 12: Learning to Move — Reinforcement Learning" },
        ],
    },
    Module {
        id: "m5",
        title: "Module 5: Vision-Language-Action",
        chapters: &[
            Chapter { id: "c13", title: "Chapter 13: Vision–Language–Action (VLA)" },
            Chapter { id: "c14", title: "Chapter 14: Voice-to-Action Systems" },
            Chapter { id: "c15", title: "Chapter 15: Conversational Robotics" },
        ],
    },
    Module {
        id: "m6",
        title: "Module 6: Capstone",
        chapters: &[
            Chapter { id: "c16", title: "Chapter 16: Capstone Project — The Autonomous Humanoid" },
            Chapter { id: "c17", title: "Chapter 17: From Simulation to the Real World" },
        ],
    },
];
